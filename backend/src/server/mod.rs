//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use readmeter::inbound::http::articles::{clear_session, get_article};
use readmeter::inbound::http::state::HttpState;
use readmeter::outbound::persistence::DieselArticleRepository;

use std::sync::Arc;

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Signed)
        .cookie_same_site(SameSite::Lax)
        .build();

    App::new()
        .app_data(http_state)
        .wrap(session)
        .service(get_article)
        .service(clear_session)
}

/// Construct an Actix HTTP server using the provided configuration.
///
/// # Parameters
/// - `config`: pre-built [`ServerConfig`] with session, binding, and database settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        db_pool,
    } = config;

    let repository = Arc::new(DieselArticleRepository::new(db_pool));
    let http_state = web::Data::new(HttpState::new(repository));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
        .wrap(Logger::default())
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Wiring tests for the assembled application.

    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
    use serde_json::json;

    use readmeter::domain::Article;
    use readmeter::outbound::persistence::{DbPool, PoolConfig};
    use readmeter::seed;

    use super::*;

    async fn seeded_dependencies() -> AppDependencies {
        let pool = DbPool::new(
            PoolConfig::new(":memory:")
                .with_max_size(1)
                .with_min_idle(None),
        )
        .expect("in-memory pool should build");
        seed::prepare_article_store(&pool)
            .await
            .expect("store should migrate and seed");
        let repository = Arc::new(DieselArticleRepository::new(pool));
        AppDependencies {
            http_state: web::Data::new(HttpState::new(repository)),
            key: Key::generate(),
            cookie_secure: false,
        }
    }

    #[actix_web::test]
    async fn serves_seeded_articles() {
        let app = init_service(build_app(seeded_dependencies().await)).await;

        let res = call_service(&app, TestRequest::get().uri("/articles/1").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let article: Article = read_body_json(res).await;
        assert_eq!(article.id, 1);
        assert_eq!(article.title, "First Article");
    }

    #[actix_web::test]
    async fn session_cookie_carries_hardened_attributes() {
        let app = init_service(build_app(seeded_dependencies().await)).await;

        let res = call_service(&app, TestRequest::get().uri("/articles/1").to_request()).await;

        let cookie = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie should be set");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[actix_web::test]
    async fn clear_endpoint_is_wired() {
        let app = init_service(build_app(seeded_dependencies().await)).await;

        let res = call_service(&app, TestRequest::get().uri("/clear").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = read_body_json(res).await;
        assert_eq!(body, json!({"message": "Session cleared"}));
    }
}
