use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenient result alias for the conversion library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The taxonomy is deliberately flat: absence, blank text, unparseable text,
/// zero, and negative values all collapse into [`Error::InvalidDistance`],
/// and the caller-facing message does not distinguish between them.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the supplied distance is missing, non-numeric, or not
    /// strictly greater than zero. Embeds the raw offending input.
    #[error("A distancia informada ({raw}) deve ser um valor numerico maior do que zero!")]
    InvalidDistance { raw: String },
}

/// Structured failure payload returned to callers when validation rejects
/// the input.
///
/// Serializes as `{"message": "..."}` with the raw offending input embedded
/// in the text (an empty placeholder when no value was supplied).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionFailure {
    /// Human-readable explanation of why the conversion was rejected.
    pub message: String,
}

impl ConversionFailure {
    /// Build the failure payload for a rejected raw input.
    pub fn invalid_distance(raw: &str) -> Self {
        Error::InvalidDistance {
            raw: raw.to_string(),
        }
        .into()
    }
}

impl From<Error> for ConversionFailure {
    fn from(err: Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConversionFailure {}
