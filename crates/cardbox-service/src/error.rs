use std::path::PathBuf;

use thiserror::Error;

use cardbox_rfc::rfc::vcard::ParseError;

use crate::directory::Handle;

/// Service layer errors
///
/// Scan and export collect these per source or per record instead of
/// stopping at the first one.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed vCard in {origin}: {error}")]
    Decode {
        origin: String,
        #[source]
        error: ParseError,
    },

    #[error("Cannot export contact {handle}: {source}")]
    Encode {
        handle: Handle,
        source: cardbox_rfc::error::RfcError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    IoWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    CoreError(#[from] cardbox_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
