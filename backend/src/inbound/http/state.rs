//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ViewLimit;
use crate::domain::ports::ArticleRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<dyn ArticleRepository>,
    pub view_limit: ViewLimit,
}

impl HttpState {
    /// Construct state over an article repository with the default allowance.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use readmeter::inbound::http::state::HttpState;
    /// use readmeter::outbound::persistence::{DbPool, DieselArticleRepository, PoolConfig};
    ///
    /// # fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("articles.db"))?;
    /// let state = HttpState::new(Arc::new(DieselArticleRepository::new(pool)));
    /// # let _ = state;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self {
            articles,
            view_limit: ViewLimit::default(),
        }
    }
}
