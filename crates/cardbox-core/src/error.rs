use thiserror::Error;

/// Errors raised while loading or checking settings.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A similarity threshold outside `0.0..=1.0`, or NaN.
    #[error("Similarity threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
