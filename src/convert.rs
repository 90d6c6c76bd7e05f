//! PDF conversion via an external headless converter process.
//!
//! The converter is any soffice-compatible CLI. The call blocks until the
//! process exits; a non-zero exit status fails the row. When conversion is
//! bypassed (dry-run or skip_convert) a marker file is written where the PDF
//! would have been.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

const SKIP_MARKER_NOTE: &str = "conversion skipped (dry-run or skip_convert)\n";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to launch converter '{exe}': {source}")]
    Launch {
        exe: String,
        #[source]
        source: std::io::Error,
    },
    #[error("converter exited with status {0}")]
    Exit(i32),
    #[error("failed to write skip marker: {0}")]
    Marker(#[source] std::io::Error),
}

/// Wrapper around the external converter executable.
pub struct Converter {
    exe: String,
}

impl Converter {
    pub fn new(exe: impl Into<String>) -> Self {
        Self { exe: exe.into() }
    }

    /// Convert `document` to PDF, placing the output in `out_dir` with the
    /// same base name. Returns the expected PDF path.
    pub fn convert(&self, document: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
        log::info!("converting {} to PDF", document.display());

        let status = Command::new(&self.exe)
            .args([
                "--headless",
                "--nologo",
                "--nolockcheck",
                "--nodefault",
                "--convert-to",
                "pdf",
                "--outdir",
            ])
            .arg(out_dir)
            .arg(document)
            .status()
            .map_err(|source| ConvertError::Launch {
                exe: self.exe.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ConvertError::Exit(status.code().unwrap_or(-1)));
        }
        Ok(pdf_path(document, out_dir))
    }
}

/// Path of the PDF the converter produces for `document` in `out_dir`.
pub fn pdf_path(document: &Path, out_dir: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    out_dir.join(format!("{stem}.pdf"))
}

/// Write the marker recording that conversion was intentionally bypassed.
/// The marker sits next to where the PDF would have been, with a `.skip`
/// suffix appended.
pub fn write_skip_marker(document: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
    let pdf = pdf_path(document, out_dir);
    let mut marker_name = pdf
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    marker_name.push(".skip");
    let marker = pdf.with_file_name(marker_name);

    fs::write(&marker, SKIP_MARKER_NOTE).map_err(ConvertError::Marker)?;
    Ok(marker)
}
