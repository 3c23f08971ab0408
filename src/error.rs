//! Error types for key decoding and formatting

use thiserror::Error;

/// Failures of the key pipeline. Each one is recoverable; the caller decides
/// whether to skip the line or stop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Checksum mismatch: expected {expected}, found {found}")]
    Checksum { expected: String, found: String },

    #[error("Private key scalar is out of range for secp256k1 (must be 0 < k < n)")]
    InvalidScalar,

    #[error("Curve backend error: {0}")]
    Backend(String),
}

impl KeyError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        KeyError::InvalidInput(msg.into())
    }
}

impl From<secp256k1::Error> for KeyError {
    fn from(err: secp256k1::Error) -> Self {
        match err {
            secp256k1::Error::InvalidSecretKey => KeyError::InvalidScalar,
            other => KeyError::Backend(other.to_string()),
        }
    }
}

impl From<k256::elliptic_curve::Error> for KeyError {
    fn from(_: k256::elliptic_curve::Error) -> Self {
        KeyError::InvalidScalar
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeyError>;
