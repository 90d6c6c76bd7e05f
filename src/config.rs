//! Runtime settings for a batch run.
//!
//! Settings are read from an optional `config.toml` in the working directory.
//! Every field falls back to an environment variable and then to a hardcoded
//! default, so a missing or partial file never aborts the run. A `.env` file
//! is honored before resolution. Malformed file content is fatal.

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while resolving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Read(#[source] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Fully populated configuration for one run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub smtp: SmtpSettings,
    pub convert: ConvertSettings,
    pub app: AppSettings,
}

/// Mail transport settings, including the dry-run and skip-send switches.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Implicit TLS when true; plaintext upgraded via STARTTLS when false.
    pub use_ssl: bool,
    pub dry_run: bool,
    pub skip_send: bool,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: env_string("SMTP_HOST", "localhost"),
            port: env_parse("SMTP_PORT", 465),
            user: env_string("SMTP_USER", ""),
            password: env_string("SMTP_PASS", ""),
            use_ssl: env_bool("SMTP_USE_SSL", true),
            dry_run: env_bool("SMTP_DRY_RUN", false),
            skip_send: env_bool("SMTP_SKIP_SEND", false),
        }
    }
}

/// Document conversion settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    /// Path or name of the soffice-compatible converter executable.
    pub converter_exe: String,
    pub skip_convert: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            converter_exe: env_string("CONVERTER_EXE", "soffice"),
            skip_convert: env_bool("CONVERT_SKIP", false),
        }
    }
}

/// Application-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub subject_prefix: String,
    /// Fixed delay inserted after each row, in milliseconds.
    pub sleep_between_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            subject_prefix: env_string("SUBJECT_PREFIX", "Document delivery - "),
            sleep_between_ms: env_parse("SLEEP_BETWEEN_MS", 0),
        }
    }
}

impl Settings {
    /// Resolve settings from `path`, falling back to environment-derived
    /// defaults for every key the file omits. A missing file yields the
    /// defaults; an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        if !path.exists() {
            log::info!(
                "no settings file at {}, using environment defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let settings = toml::from_str(&raw).map_err(ConfigError::Parse)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

fn env_string(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn env_parse<T: FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(fallback)
}

fn env_bool(key: &str, fallback: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().to_ascii_lowercase().parse().ok())
        .unwrap_or(fallback)
}
