//! Error types for the promptmap domain.
//!
//! Extraction, ordering and rendering are total and never fail; errors only
//! arise at the edges (decoding persisted documents, talking to a classifier).

use thiserror::Error;

/// The top-level error type for promptmap operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Classifier errors ---
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of an external semantic classifier.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Classifier returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_error_displays_correctly() {
        let err = Error::Classifier(ClassifierError::ApiError {
            status_code: 502,
            message: "bad gateway".into(),
        });
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn client_setup_failure_is_its_own_variant() {
        let err = ClassifierError::Client("no TLS backend".into());
        assert_eq!(err.to_string(), "HTTP client setup failed: no TLS backend");
    }

    #[test]
    fn serde_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
