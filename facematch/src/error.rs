//! Error taxonomy shared by both handler variants.

use http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during one invocation.
///
/// Every variant is answered to the caller as a response carrying the fixed
/// header set and the `Display` text as body; the handlers never bubble an
/// `Err` up to the runtime.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The request's image string is not a usable data URL.
    #[error("invalid image payload: {0}")]
    InvalidInput(String),

    /// A required environment variable is absent.
    #[error("missing environment variable {0}")]
    Config(&'static str),

    /// The face-comparison call failed.
    #[error("face comparison failed: {0}")]
    Compare(String),

    /// Writing the matched probe back to storage failed.
    #[error("failed to archive matched image: {0}")]
    Archive(String),
}

impl HandlerError {
    /// Status code the error is reported with. Only malformed input is the
    /// caller's fault; everything else is a 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HandlerError::Config(_) | HandlerError::Compare(_) | HandlerError::Archive(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
