//! SQLite-backed article persistence adapter.
//!
//! This adapter implements the `ArticleRepository` port over a pooled SQLite
//! connection. Diesel's SQLite driver is synchronous, so every operation hops
//! to the blocking thread pool before touching the database.

use async_trait::async_trait;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{ArticleRepository, ArticleStoreError};
use crate::domain::{Article, NewArticle};

use super::models::{ArticleRow, NewArticleRow};
use super::pool::{DbPool, PoolError};
use super::schema::articles;

/// Diesel-backed implementation of the article repository.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a Diesel operation on the blocking thread pool.
    async fn run_blocking<T, F>(&self, op: F) -> Result<T, ArticleStoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            op(&mut conn).map_err(map_diesel_error)
        })
        .await
        .map_err(|err| ArticleStoreError::query(format!("blocking task failed: {err}")))?
    }
}

/// Map pool errors to domain persistence errors.
fn map_pool_error(error: PoolError) -> ArticleStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ArticleStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to domain persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> ArticleStoreError {
    use diesel::result::Error as DieselError;

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                error = %error_message,
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(_, info) => ArticleStoreError::query(info.message().to_owned()),
        _ => ArticleStoreError::query(error_message),
    }
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn count_all(&self) -> Result<i64, ArticleStoreError> {
        self.run_blocking(|conn| articles::table.count().get_result(conn))
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, ArticleStoreError> {
        let row = self
            .run_blocking(move |conn| {
                articles::table
                    .find(id)
                    .select(ArticleRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(Article::from))
    }

    async fn insert_all(&self, to_insert: &[NewArticle]) -> Result<usize, ArticleStoreError> {
        let owned = to_insert.to_vec();
        self.run_blocking(move |conn| {
            let rows: Vec<NewArticleRow<'_>> = owned.iter().map(NewArticleRow::from).collect();
            diesel::insert_into(articles::table)
                .values(&rows)
                .execute(conn)
        })
        .await
    }
}
