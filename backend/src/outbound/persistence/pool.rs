//! Connection pool for Diesel SQLite connections.
//!
//! This module wraps Diesel's bundled `r2d2` support to provide a shared
//! connection pool for the persistence layer. The pool manages connection
//! lifecycle and checkout with configurable limits.
//!
//! # Design
//!
//! - SQLite connections are synchronous; callers hop to the blocking thread
//!   pool (`tokio::task::spawn_blocking`) before touching a connection
//! - Pool build is eager, so a bad database path fails at startup
//! - All errors are mapped to `PoolError` variants

use std::time::Duration;

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

/// Pool lifecycle and checkout failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection could be checked out of the pool.
    #[error("connection checkout failed: {message}")]
    Checkout { message: String },

    /// The pool itself could not be constructed.
    #[error("pool construction failed: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Checkout failure carrying the underlying r2d2 message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Construction failure carrying the underlying r2d2 message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool sizing and checkout settings.
///
/// # Example
///
/// ```ignore
/// let config = PoolConfig::new("articles.db")
///     .with_max_size(20)
///     .with_min_idle(Some(5))
///     .with_connection_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Configuration for the given database URL with default sizing.
    ///
    /// For SQLite the URL is a filesystem path, or `:memory:` for an
    /// in-process database. Defaults: `max_size` 10, `min_idle` 2,
    /// `connection_timeout` 30 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the pool at `max_size` open connections.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Keep at least `min_idle` warm connections, or `None` to disable.
    ///
    /// r2d2 panics when `min_idle` exceeds `max_size`, so single-connection
    /// pools must pass `None`.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Bound how long a checkout waits for a free connection.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// The configured database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Shared connection pool for SQLite via Diesel.
///
/// Each in-memory (`:memory:`) connection owns a private database, so pools
/// over in-memory URLs should cap `max_size` at one.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(PoolConfig::new("articles.db"))?;
/// let mut conn = pool.get()?;
/// // Use conn for Diesel operations...
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Build the pool, opening `min_idle` connections up front.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g.,
    /// an unwritable database path).
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check a connection out of the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained
    /// within the configured timeout.
    pub fn get(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, PoolError> {
        self.inner
            .get()
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn config_starts_from_documented_defaults() {
        let config = PoolConfig::new("articles.db");

        assert_eq!(config.database_url(), "articles.db");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.min_idle, Some(2));
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn builders_override_each_setting() {
        let config = PoolConfig::new("articles.db")
            .with_max_size(20)
            .with_min_idle(Some(5))
            .with_connection_timeout(Duration::from_secs(60));

        assert_eq!(config.max_size, 20);
        assert_eq!(config.min_idle, Some(5));
        assert_eq!(config.connection_timeout, Duration::from_secs(60));
    }

    #[rstest]
    fn errors_keep_the_underlying_message() {
        let checkout_err = PoolError::checkout("connection refused");
        let build_err = PoolError::build("invalid path");

        assert!(checkout_err.to_string().contains("connection refused"));
        assert!(build_err.to_string().contains("invalid path"));
    }

    #[rstest]
    fn pool_builds_and_checks_out_in_memory() {
        let config = PoolConfig::new(":memory:")
            .with_max_size(1)
            .with_min_idle(None);

        let pool = DbPool::new(config).expect("in-memory pool builds");
        pool.get().expect("connection checks out");
    }
}
