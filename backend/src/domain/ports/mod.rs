//! Domain ports and supporting types for the hexagonal boundary.

mod article_repository;
mod view_counter;

pub use article_repository::{ArticleRepository, ArticleStoreError};
pub use view_counter::{SessionStateError, ViewCounter};
