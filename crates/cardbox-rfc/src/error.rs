use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// Codec-level errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Encode error: {0}")]
    EncodeError(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
