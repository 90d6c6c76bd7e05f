//! Shared fixtures for integration tests: a scratch input/output directory
//! pair and dry-run settings that never touch the network or the converter.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use mailmerge_batch::config::Settings;

pub struct Fixture {
    // Held for its Drop; removing the scratch tree ends the fixture.
    _root: TempDir,
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("scratch directory");
        let data_dir = root.path().join("data");
        let out_dir = root.path().join("output");
        fs::create_dir(&data_dir).expect("data directory");
        Self {
            _root: root,
            data_dir,
            out_dir,
        }
    }

    pub fn write_template(&self, name: &str, contents: &str) {
        fs::write(self.data_dir.join(name), contents).expect("template fixture");
    }

    pub fn write_data_csv(&self, contents: &str) {
        fs::write(self.data_dir.join("data.csv"), contents).expect("csv fixture");
    }

    pub fn out_file(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }
}

/// Settings with dry-run enabled: conversion is skipped and sends are
/// reported instead of transmitted.
pub fn dry_run_settings() -> Settings {
    let mut settings = Settings::default();
    settings.smtp.dry_run = true;
    settings.smtp.user = "sender@example.com".to_string();
    settings
}
