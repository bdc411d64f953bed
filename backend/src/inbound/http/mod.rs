//! HTTP inbound adapter exposing REST endpoints.

pub mod articles;
pub mod error;
pub mod responses;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use crate::domain::ApiResult;
