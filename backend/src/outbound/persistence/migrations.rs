//! Embedded Diesel migrations for the article schema.
//!
//! Migrations are compiled into the binary so a fresh database file is
//! brought up to date at startup without any external tooling.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::debug;

use super::pool::{DbPool, PoolError};

/// All migrations shipped with the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying embedded migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// A connection could not be checked out of the pool.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// Applying pending migrations failed.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

impl MigrationError {
    fn apply(message: impl Into<String>) -> Self {
        Self::Apply {
            message: message.into(),
        }
    }
}

/// Apply all pending embedded migrations to the pooled database.
///
/// SQLite DDL is synchronous, so the work runs on the blocking thread pool.
///
/// # Errors
///
/// Returns [`MigrationError::Pool`] when no connection can be checked out
/// and [`MigrationError::Apply`] when a migration fails to run.
pub async fn apply_pending_migrations(pool: &DbPool) -> Result<(), MigrationError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::apply(err.to_string()))?;
        debug!(count = applied.len(), "applied pending migrations");
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::apply(format!("blocking task failed: {err}")))?
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::outbound::persistence::PoolConfig;

    fn in_memory_pool() -> DbPool {
        let config = PoolConfig::new(":memory:")
            .with_max_size(1)
            .with_min_idle(None);
        DbPool::new(config).expect("in-memory pool builds")
    }

    #[tokio::test]
    async fn applies_cleanly_to_a_fresh_database() {
        let pool = in_memory_pool();

        apply_pending_migrations(&pool)
            .await
            .expect("migrations apply");
    }

    #[tokio::test]
    async fn reapplying_is_a_no_op() {
        let pool = in_memory_pool();

        apply_pending_migrations(&pool)
            .await
            .expect("first run applies");
        apply_pending_migrations(&pool)
            .await
            .expect("second run finds nothing pending");
    }
}
