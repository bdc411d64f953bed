//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (articles, session)
//! - **Schemas**: Payload types serialised by those endpoints
//!
//! The generated specification is exported via `cargo run --bin openapi-dump`
//! for external tooling.

use utoipa::OpenApi;

use crate::domain::{Article, Error};
use crate::inbound::http::responses::StatusMessage;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Readmeter API",
        description = "HTTP interface for article reads metered per session."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::articles::get_article,
        crate::inbound::http::articles::clear_session,
    ),
    components(schemas(Article, Error, StatusMessage)),
    tags(
        (name = "articles", description = "Operations related to articles"),
        (name = "session", description = "Session lifecycle operations")
    )
)]
pub struct ApiDoc;
