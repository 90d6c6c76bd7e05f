//! Tabular row source.
//!
//! Reads `data.csv` into an ordered sequence of records. Each record maps the
//! header names onto scalar values; integer, float, and boolean literals are
//! recognized, everything else stays a string. Row order is preserved and
//! indices are 1-based, both feed into deterministic output naming.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Fixed name of the tabular input file inside the data directory.
pub const DATA_FILE: &str = "data.csv";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("data file not found: {0}")]
    Missing(String),
    #[error("failed to open data file: {0}")]
    Open(#[source] std::io::Error),
    #[error("malformed data file: {0}")]
    Parse(#[source] csv::Error),
}

/// One row of the input table.
#[derive(Debug, Clone)]
pub struct Record {
    index: usize,
    fields: HashMap<String, Value>,
}

impl Record {
    /// 1-based position of the row in the input file.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// The `name` field as text; empty when the column is absent or blank.
    pub fn name(&self) -> String {
        self.field_text("name").unwrap_or_default()
    }

    /// The `email` field, `None` when absent or blank. Callers must treat
    /// `None` as fatal for the row's send step.
    pub fn email(&self) -> Option<String> {
        self.field_text("email").filter(|v| !v.trim().is_empty())
    }

    fn field_text(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Parse the data file into records, preserving input order.
pub fn read_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.display().to_string()));
    }

    let file = fs::File::open(path).map_err(DatasetError::Open)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(DatasetError::Parse)?.clone();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(DatasetError::Parse)?;
        let mut fields = HashMap::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(row.iter()) {
            fields.insert(header.to_string(), infer_scalar(value));
        }
        records.push(Record {
            index: i + 1,
            fields,
        });
    }
    Ok(records)
}

/// Recognize integer, float, and boolean literals; keep everything else as
/// the original string.
fn infer_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match trimmed {
        "true" | "True" => Value::Bool(true),
        "false" | "False" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}
