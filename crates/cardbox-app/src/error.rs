use thiserror::Error;

/// Application-level errors (command line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] cardbox_service::error::ServiceError),

    #[error(transparent)]
    RfcError(#[from] cardbox_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] cardbox_core::error::CoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize contact: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
