//! Merge engine.
//!
//! Loads the template source once, then merges one record per call and
//! writes the per-record document into the output directory. The template
//! file itself is never modified.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};

use crate::dataset::Record;

use super::naming::rendered_file_name;
use super::{RenderError, RenderedDocument};

#[derive(Debug)]
pub struct MergeEngine {
    template_path: PathBuf,
    source: String,
}

impl MergeEngine {
    /// Load the template source from `template_path`.
    pub fn new(template_path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(template_path).map_err(RenderError::TemplateIo)?;
        Ok(Self {
            template_path: template_path.to_path_buf(),
            source,
        })
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Merge one record into the template and write the result to `out_dir`.
    ///
    /// Rendering runs with strict undefined behavior, so a placeholder that
    /// no record field resolves is an error rather than empty output.
    pub fn render(&self, record: &Record, out_dir: &Path) -> Result<RenderedDocument, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        let body = env
            .render_str(&self.source, record.fields())
            .map_err(RenderError::Render)?;

        let file_name = rendered_file_name(&self.template_path, record.index(), &record.name());
        let path = out_dir.join(file_name);
        fs::write(&path, body).map_err(RenderError::WriteOutput)?;

        Ok(RenderedDocument { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{read_records, DATA_FILE};

    fn record_from(csv: &str) -> Record {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE);
        fs::write(&path, csv).unwrap();
        read_records(&path).unwrap().remove(0)
    }

    #[test]
    fn placeholders_are_substituted_from_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Letter.docx");
        fs::write(&template, "Dear {{ name }}, your code is {{ code }}.").unwrap();

        let out = tempfile::tempdir().unwrap();
        let engine = MergeEngine::new(&template).unwrap();
        let record = record_from("name,email,code\nKim,kim@example.com,7\n");

        let rendered = engine.render(&record, out.path()).unwrap();
        assert_eq!(rendered.file_name(), "Letter_1_Kim.docx");
        let body = fs::read_to_string(rendered.path()).unwrap();
        assert_eq!(body, "Dear Kim, your code is 7.");
    }

    #[test]
    fn unresolved_placeholder_fails_the_row() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Letter.docx");
        fs::write(&template, "Hello {{ missing_column }}").unwrap();

        let out = tempfile::tempdir().unwrap();
        let engine = MergeEngine::new(&template).unwrap();
        let record = record_from("name,email\nKim,kim@example.com\n");

        let err = engine.render(&record, out.path()).unwrap_err();
        assert!(matches!(err, RenderError::Render(_)));
    }

    #[test]
    fn template_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Letter.docx");
        fs::write(&template, "Hi {{ name }}").unwrap();

        let out = tempfile::tempdir().unwrap();
        let engine = MergeEngine::new(&template).unwrap();
        let record = record_from("name,email\nKim,kim@example.com\n");
        engine.render(&record, out.path()).unwrap();

        assert_eq!(fs::read_to_string(&template).unwrap(), "Hi {{ name }}");
    }

    #[test]
    fn missing_template_is_a_template_io_error() {
        let err = MergeEngine::new(Path::new("no-such-template.docx")).unwrap_err();
        assert!(matches!(err, RenderError::TemplateIo(_)));
    }
}
