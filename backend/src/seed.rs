//! Startup preparation for the article store.
//!
//! On boot the service applies pending migrations and, when the articles
//! table is empty, inserts a small starter corpus so a fresh deployment has
//! content to serve. A populated table is never touched.

use thiserror::Error;
use tracing::info;

use crate::domain::NewArticle;
use crate::domain::ports::{ArticleRepository, ArticleStoreError};
use crate::outbound::persistence::{
    DbPool, DieselArticleRepository, MigrationError, apply_pending_migrations,
};

/// Errors returned while preparing the article store at startup.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Embedded migrations could not be applied.
    #[error(transparent)]
    Migration(#[from] MigrationError),
    /// Counting or inserting articles failed.
    #[error("seeding error: {0}")]
    Store(#[from] ArticleStoreError),
}

/// Outcome of the startup seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and the starter articles were inserted.
    Applied {
        /// Number of rows written.
        rows: usize,
    },
    /// The table already holds articles; nothing was written.
    AlreadyPopulated,
}

/// Starter articles inserted into an empty store.
fn starter_articles() -> Vec<NewArticle> {
    [
        ("Author 1", "First Article", "first", 5),
        ("Author 2", "Second Article", "second", 3),
        ("Author 3", "Third Article", "third", 7),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (author, title, ordinal, minutes_to_read))| NewArticle {
        author: author.to_owned(),
        title: title.to_owned(),
        content: format!("Content of the {ordinal} article."),
        preview: format!("Preview {}", index + 1),
        minutes_to_read,
    })
    .collect()
}

/// Bring the article store up to date and populate it when empty.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when migrations cannot be applied or the
/// store rejects the count or insert.
pub async fn prepare_article_store(pool: &DbPool) -> Result<SeedOutcome, StartupSeedingError> {
    apply_pending_migrations(pool).await?;
    let repository = DieselArticleRepository::new(pool.clone());
    seed_articles(&repository).await
}

/// Insert the starter articles when the store is empty.
///
/// The emptiness check lives here rather than in the repository so the
/// policy (seed only a pristine table) stays in one place.
pub async fn seed_articles(
    repository: &dyn ArticleRepository,
) -> Result<SeedOutcome, StartupSeedingError> {
    let existing = repository.count_all().await?;
    if existing > 0 {
        info!(existing, "article store already populated; skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let rows = repository.insert_all(&starter_articles()).await?;
    info!(rows, "article store seeded");
    Ok(SeedOutcome::Applied { rows })
}
