//! Template discovery.
//!
//! The input directory must contain exactly one template document. Zero or
//! multiple candidates terminate the run before any row is processed.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension identifying template documents in the input directory.
pub const TEMPLATE_EXT: &str = "docx";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to scan input directory {dir}: {source}")]
    Scan {
        dir: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no .docx template found in {0}")]
    NotFound(String),
    #[error("multiple .docx templates found in {dir}, keep exactly one: {}", .candidates.join(", "))]
    Ambiguous { dir: String, candidates: Vec<String> },
}

/// Locate the single template document in `dir`.
///
/// Candidates are sorted by name before counting, so the result does not
/// depend on directory iteration order.
pub fn find_single_template(dir: &Path) -> Result<PathBuf, TemplateError> {
    let entries = fs::read_dir(dir).map_err(|source| TemplateError::Scan {
        dir: dir.display().to_string(),
        source,
    })?;

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TemplateError::Scan {
            dir: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_template_ext(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(TemplateError::NotFound(dir.display().to_string())),
        1 => Ok(candidates.remove(0)),
        _ => Err(TemplateError::Ambiguous {
            dir: dir.display().to_string(),
            candidates: candidates
                .iter()
                .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
                .map(str::to_string)
                .collect(),
        }),
    }
}

fn has_template_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(TEMPLATE_EXT))
}
