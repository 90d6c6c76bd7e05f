//! Sequential batch driver.
//!
//! Resolves configuration and template once, then makes a single forward
//! pass over the input rows: render, convert-or-skip, send-or-skip. The
//! first row failure aborts the remaining batch.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;

use crate::config::Settings;
use crate::convert::{self, Converter};
use crate::dataset::{self, Record, DATA_FILE};
use crate::mail::{greeting_body, MailDispatcher, MailError, OutgoingMail};
use crate::render::MergeEngine;
use crate::template;

pub struct BatchRunner {
    settings: Settings,
    data_dir: PathBuf,
    out_dir: PathBuf,
}

impl BatchRunner {
    /// Input and output directories are passed in explicitly; the driver has
    /// no ambient path state.
    pub fn new(settings: Settings, data_dir: PathBuf, out_dir: PathBuf) -> Self {
        Self {
            settings,
            data_dir,
            out_dir,
        }
    }

    /// Run the full batch. Prints `ALL DONE` after the last record.
    pub fn run(&self) -> anyhow::Result<()> {
        let template_path = template::find_single_template(&self.data_dir)?;
        log::info!("using template {}", template_path.display());

        let data_path = self.data_dir.join(DATA_FILE);
        let records = dataset::read_records(&data_path)?;
        log::info!(
            "loaded {} record(s) from {}",
            records.len(),
            data_path.display()
        );

        fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("failed to create output directory {}", self.out_dir.display())
        })?;

        let engine = MergeEngine::new(&template_path)?;
        let converter = Converter::new(self.settings.convert.converter_exe.clone());
        let dispatcher = MailDispatcher::new(self.settings.smtp.clone());
        let skip_convert = self.settings.convert.skip_convert || self.settings.smtp.dry_run;

        let total = records.len();
        for record in &records {
            self.process_record(record, total, &engine, &converter, &dispatcher, skip_convert)
                .with_context(|| format!("row {} of {}", record.index(), total))?;

            let delay = self.settings.app.sleep_between_ms;
            if delay > 0 {
                thread::sleep(Duration::from_millis(delay));
            }
        }

        println!("ALL DONE");
        Ok(())
    }

    fn process_record(
        &self,
        record: &Record,
        total: usize,
        engine: &MergeEngine,
        converter: &Converter,
        dispatcher: &MailDispatcher,
        skip_convert: bool,
    ) -> anyhow::Result<()> {
        log::info!("processing row {} of {}", record.index(), total);

        let rendered = engine.render(record, &self.out_dir)?;
        let pdf = if skip_convert {
            let marker = convert::write_skip_marker(rendered.path(), &self.out_dir)?;
            log::info!("conversion skipped, marker at {}", marker.display());
            convert::pdf_path(rendered.path(), &self.out_dir)
        } else {
            converter.convert(rendered.path(), &self.out_dir)?
        };

        let to = record.email().ok_or(MailError::MissingRecipient)?;
        let mail = OutgoingMail {
            from: self.settings.smtp.user.clone(),
            to,
            subject: format!("{}{}", self.settings.app.subject_prefix, record.name()),
            body: greeting_body(&record.name()),
            attachment: pdf,
        };
        dispatcher.dispatch(mail)?;
        Ok(())
    }
}
