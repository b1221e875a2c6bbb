use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_DUPLICATE_THRESHOLD, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub duplicates: DuplicateConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DuplicateConfig {
    /// Pairs whose name or phone similarity is strictly above this value are reported.
    pub threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Write non-ASCII `FN`/`N` values quoted-printable for legacy readers.
    pub quoted_printable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            duplicates: DuplicateConfig {
                threshold: DEFAULT_DUPLICATE_THRESHOLD,
            },
            export: ExportConfig {
                quoted_printable: false,
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads settings from built-in defaults, the optional `cardbox.toml` in the
    /// working directory (or `file` when given), and `CARDBOX_*` environment
    /// variables. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if an explicitly requested file is missing.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", defaults.logging.level)?
            .set_default("duplicates.threshold", defaults.duplicates.threshold)?
            .set_default("export.quoted_printable", defaults.export.quoted_printable)?
            // TOML file
            .add_source(file_source)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        tracing::debug!(?settings, "Settings loaded");

        Ok(settings)
    }

    /// Checks values the type system can't.
    ///
    /// ## Errors
    /// Returns a configuration error if the duplicate threshold is outside `0.0..=1.0`.
    pub fn validate(&self) -> CoreResult<()> {
        check_threshold(self.duplicates.threshold)
            .map(|_| ())
            .map_err(|err| CoreError::ConfigError(format!("duplicates.threshold: {err}")))
    }
}

/// Validates a similarity threshold.
///
/// ## Errors
/// Returns `InvalidThreshold` unless `value` is a number in `0.0..=1.0`.
pub fn check_threshold(value: f64) -> CoreResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::InvalidThreshold(value))
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, the settings file and environment variables.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load(file)
}
