use thiserror::Error;

use crate::models::video::VideoRecord;

/// Failure taxonomy for a video lookup, decoupled from the error payload
/// so callers can branch without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    SchemaMismatch,
    NotFound,
    UpstreamError,
    NetworkError,
    Configuration,
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid URL: no video id in {0:?}")]
    InvalidUrl(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Video not found.")]
    NotFound,

    #[error("API error: {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API key not configured")]
    MissingApiKey,
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            LookupError::SchemaMismatch(_) => ErrorKind::SchemaMismatch,
            LookupError::NotFound => ErrorKind::NotFound,
            LookupError::Upstream { .. } => ErrorKind::UpstreamError,
            LookupError::Network(_) => ErrorKind::NetworkError,
            LookupError::MissingApiKey => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Outcome of a single video lookup: the validated record or a typed failure.
pub type LookupResult = Result<VideoRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_text() {
        assert_eq!(LookupError::NotFound.to_string(), "Video not found.");
    }

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            LookupError::InvalidUrl("x".into()).kind(),
            ErrorKind::InvalidUrl
        );
        assert_eq!(
            LookupError::SchemaMismatch("missing field".into()).kind(),
            ErrorKind::SchemaMismatch
        );
        assert_eq!(LookupError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            LookupError::Upstream {
                status: 403,
                message: "quota".into()
            }
            .kind(),
            ErrorKind::UpstreamError
        );
        assert_eq!(LookupError::MissingApiKey.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn upstream_display_carries_status_and_message() {
        let err = LookupError::Upstream {
            status: 403,
            message: "The request is missing a valid API key.".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error: 403: The request is missing a valid API key."
        );
    }
}
