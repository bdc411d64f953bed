//! Article entity and its insertion shape.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored article as served to clients.
///
/// Field names double as the serialisation contract: successful fetches
/// return the full field set as a flat snake_case JSON object. Textual
/// fields are stored and served verbatim; the store assigns `id` and stamps
/// `date` at insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    /// Store-assigned identifier, unique and stable for the row's lifetime.
    pub id: i32,
    #[schema(example = "Author 1")]
    pub author: String,
    #[schema(example = "First Article")]
    pub title: String,
    /// Full body text.
    pub content: String,
    /// Short teaser shown in place of the body on listings.
    pub preview: String,
    /// Estimated reading time in minutes.
    #[schema(example = 5)]
    pub minutes_to_read: i32,
    /// Insertion timestamp, stamped by the store.
    pub date: NaiveDateTime,
}

/// An article about to be inserted: every field the store does not assign
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub minutes_to_read: i32,
}
