//! Port abstraction for the per-session page-view counter.

/// Failures reading or writing counter state in the session backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStateError {
    /// Stored counter state could not be read back.
    #[error("failed to read session state: {message}")]
    Read { message: String },
    /// Counter state could not be written to the session.
    #[error("failed to write session state: {message}")]
    Write { message: String },
}

impl SessionStateError {
    /// Read failure with the adapter's own description.
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
        }
    }

    /// Write failure with the adapter's own description.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Page-view counter scoped to the calling client's session.
///
/// Implementations choose where the count lives; the limit policy in
/// [`crate::domain::view_limit`] sees only this interface. A session with no
/// recorded views reports zero.
pub trait ViewCounter {
    /// Current view count for the session.
    fn views(&self) -> Result<u32, SessionStateError>;

    /// Record one view and return the post-increment count.
    ///
    /// Increments unconditionally; enforcing an allowance is the caller's
    /// concern.
    fn increment(&self) -> Result<u32, SessionStateError>;

    /// Discard all session state, returning the counter to zero.
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::SessionStateError;

    #[rstest]
    #[case(
        SessionStateError::read("corrupt value"),
        "failed to read session state: corrupt value"
    )]
    #[case(
        SessionStateError::write("serialisation failed"),
        "failed to write session state: serialisation failed"
    )]
    fn constructors_format_messages(#[case] err: SessionStateError, #[case] display: &str) {
        assert_eq!(err.to_string(), display);
    }
}
