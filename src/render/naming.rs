//! Deterministic output naming for rendered documents.

use std::path::Path;

/// Build the rendered file name for one record:
/// `{template-stem}_{index}_{name}.{ext}`.
///
/// The `_{name}` suffix is omitted entirely when the name is empty, and the
/// name component is sanitized for filesystem use.
pub fn rendered_file_name(template: &Path, index: usize, name: &str) -> String {
    let stem = template
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let ext = template
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("docx");

    let mut file_name = format!("{stem}_{index}");
    let safe = sanitize_filename::sanitize(name.trim());
    if !safe.is_empty() {
        file_name.push('_');
        file_name.push_str(&safe);
    }
    format!("{file_name}.{ext}")
}
