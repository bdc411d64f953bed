//! Articles API handlers.
//!
//! ```text
//! GET /articles/{id}
//! GET /clear
//! ```

use actix_web::{get, web};
use tracing::debug;

use crate::domain::ports::{ArticleStoreError, ViewCounter};
use crate::domain::{Article, Error, register_view};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::StatusMessage;
use crate::inbound::http::session::SessionViewCounter;
use crate::inbound::http::state::HttpState;

/// Fetch a single article, charging one view to the session.
///
/// The lookup runs first: a missing article returns `404` without touching
/// the counter. A found article always charges the session, even when the
/// post-increment count exceeds the allowance and the fetch is rejected
/// with `401`.
#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(
        ("id" = i32, Path, description = "Article identifier")
    ),
    responses(
        (status = 200, description = "The requested article", body = Article),
        (status = 401, description = "Page-view allowance spent", body = Error),
        (status = 404, description = "No article with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "getArticle"
)]
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    counter: SessionViewCounter,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Article>> {
    let id = path.into_inner();
    let article = state
        .articles
        .find_by_id(id)
        .await
        .map_err(map_store_error)?
        .ok_or_else(Error::article_not_found)?;

    let views = register_view(&counter, state.view_limit)?;
    debug!(article_id = id, views, "article view charged");

    Ok(web::Json(article))
}

fn map_store_error(err: ArticleStoreError) -> Error {
    match err {
        ArticleStoreError::Connection { message } | ArticleStoreError::Query { message } => {
            Error::internal(message)
        }
    }
}

/// Drop the caller's session, resetting the page-view allowance.
#[utoipa::path(
    get,
    path = "/clear",
    responses(
        (status = 200, description = "Session cleared", body = StatusMessage)
    ),
    tags = ["session"],
    operation_id = "clearSession"
)]
#[get("/clear")]
pub async fn clear_session(counter: SessionViewCounter) -> web::Json<StatusMessage> {
    counter.clear();
    web::Json(StatusMessage::new("Session cleared"))
}
