//! Port abstraction for article persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Article, NewArticle};

/// Persistence errors raised by article repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleStoreError {
    /// Repository connection could not be established.
    #[error("article store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("article store query failed: {message}")]
    Query { message: String },
}

impl ArticleStoreError {
    /// Connection failure with the adapter's own description.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query failure with the adapter's own description.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read and insert access to the persistent article table.
///
/// Lookups signal absence with `None`; only adapter failures surface as
/// errors.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Count the stored articles.
    async fn count_all(&self) -> Result<i64, ArticleStoreError>;

    /// Fetch an article by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, ArticleStoreError>;

    /// Insert the given articles, returning the number of rows written.
    ///
    /// The store performs a plain batch insert; deciding whether the table
    /// needs populating is the caller's concern.
    async fn insert_all(&self, articles: &[NewArticle]) -> Result<usize, ArticleStoreError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::ArticleStoreError;

    #[rstest]
    #[case(
        ArticleStoreError::connection("pool exhausted"),
        "article store connection failed: pool exhausted"
    )]
    #[case(
        ArticleStoreError::query("table missing"),
        "article store query failed: table missing"
    )]
    fn constructors_format_messages(#[case] err: ArticleStoreError, #[case] display: &str) {
        assert_eq!(err.to_string(), display);
    }
}
