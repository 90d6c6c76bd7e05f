//! Mail-merge batch pipeline.
//!
//! For each row of a CSV file: fill a document template, convert the result
//! to PDF with an external headless converter, and email the PDF to the
//! row's recipient. One sequential forward pass, no state across rows beyond
//! the shared settings and template path.

pub mod batch;
pub mod config;
pub mod convert;
pub mod dataset;
pub mod mail;
pub mod render;
pub mod template;

pub use batch::BatchRunner;
pub use config::Settings;
