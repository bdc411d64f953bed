//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by SQLite via the Diesel ORM with `r2d2` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Blocking-safe access**: SQLite connections are synchronous, so
//!   adapters run Diesel work on the blocking thread pool.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```ignore
//! use readmeter::outbound::persistence::{DbPool, PoolConfig, DieselArticleRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("articles.db"))?;
//! let repo = DieselArticleRepository::new(pool);
//! ```

mod diesel_article_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use migrations::{MigrationError, apply_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
