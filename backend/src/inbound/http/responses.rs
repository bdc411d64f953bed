//! Shared response payloads for the HTTP adapter.

use serde::Serialize;
use utoipa::ToSchema;

/// Single-field status payload returned by non-resource endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusMessage {
    #[schema(example = "Session cleared")]
    message: &'static str,
}

impl StatusMessage {
    /// Wrap a fixed status message.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
