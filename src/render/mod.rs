//! Per-record document rendering.
//!
//! The template is plain text with Jinja-style placeholders. Rendering is
//! strict: a placeholder with no matching record field fails the row.

pub mod engine;
pub mod naming;

pub use engine::MergeEngine;
pub use naming::rendered_file_name;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while rendering a record into the template.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("template rendering failed: {0}")]
    Render(#[source] minijinja::Error),
    #[error("failed to write rendered document: {0}")]
    WriteOutput(#[source] std::io::Error),
}

/// A rendered per-record document on disk.
#[derive(Debug)]
pub struct RenderedDocument {
    pub path: PathBuf,
}

impl RenderedDocument {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
