//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.

use serde::Serialize;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
///
/// Codes never appear on the wire; adapters use them to pick a status code
/// while clients only see the [`Error`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The requested article does not exist.
    NotFound,
    /// The session has spent its page-view allowance.
    LimitExceeded,
    /// An unexpected error occurred inside the domain or an adapter.
    InternalError,
}

/// Domain error payload.
///
/// Serialises as a single-field `{"message": ...}` object; the [`ErrorCode`]
/// stays server side.
///
/// # Examples
/// ```
/// use readmeter::domain::{Error, ErrorCode};
///
/// let err = Error::article_not_found();
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Article not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Error {
    #[serde(skip)]
    code: ErrorCode,
    #[schema(example = "Article not found")]
    message: String,
}

impl Error {
    /// Create a new error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The requested article identifier matches no stored row.
    pub fn article_not_found() -> Self {
        Self::new(ErrorCode::NotFound, "Article not found")
    }

    /// The session's post-increment view count exceeds its allowance.
    pub fn limit_reached() -> Self {
        Self::new(ErrorCode::LimitExceeded, "Maximum pageview limit reached")
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::{Error, ErrorCode};

    #[rstest]
    #[case(Error::article_not_found(), ErrorCode::NotFound, "Article not found")]
    #[case(
        Error::limit_reached(),
        ErrorCode::LimitExceeded,
        "Maximum pageview limit reached"
    )]
    #[case(Error::internal("boom"), ErrorCode::InternalError, "boom")]
    fn constructors_set_code_and_message(
        #[case] err: Error,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        assert_eq!(err.code(), code);
        assert_eq!(err.message(), message);
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn serialises_message_only() {
        let err = Error::limit_reached();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Maximum pageview limit reached" })
        );
    }
}
