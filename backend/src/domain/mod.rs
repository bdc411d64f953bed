//! Domain primitives and aggregates.
//!
//! Purpose: Define the article entity, the session view allowance policy,
//! and the ports adapters implement. Keep types transport agnostic and
//! document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Article / NewArticle: the stored entity and its insertion shape.
//! - Error / ErrorCode: API error payload and its stable category.
//! - ViewLimit / register_view: per-session page-view allowance policy.
//! - ports: traits the inbound and outbound adapters implement.

pub mod article;
pub mod error;
pub mod ports;
pub mod view_limit;

pub use self::article::{Article, NewArticle};
pub use self::error::{Error, ErrorCode};
pub use self::view_limit::{ViewLimit, register_view};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use readmeter::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::article_not_found())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
