//! Backend entry-point: loads configuration, prepares the article store, and
//! serves the HTTP API.

mod server;

use std::path::Path;

use actix_web::cookie::Key;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use readmeter::config::AppSettings;
use readmeter::outbound::persistence::{DbPool, PoolConfig};
use readmeter::seed;
use server::ServerConfig;

const SESSION_KEY_MIN_LEN: usize = 64;

/// Load the session signing key from `path`.
///
/// Debug builds fall back to an ephemeral key when the file is unreadable;
/// release builds treat that as a startup error. A key that is present but
/// too short is always an error.
fn load_session_key(path: &Path) -> std::io::Result<Key> {
    match std::fs::read(path) {
        Ok(bytes) if bytes.len() >= SESSION_KEY_MIN_LEN => Ok(Key::derive_from(&bytes)),
        Ok(bytes) => Err(std::io::Error::other(format!(
            "session key at {} is too short: {} bytes, need {SESSION_KEY_MIN_LEN}",
            path.display(),
            bytes.len()
        ))),
        Err(e) if cfg!(debug_assertions) => {
            warn!(path = %path.display(), error = %e, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(e) => Err(std::io::Error::other(format!(
            "failed to read session key at {}: {e}",
            path.display()
        ))),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let key = load_session_key(&settings.session_key_file())?;

    let pool =
        DbPool::new(PoolConfig::new(settings.database_url())).map_err(std::io::Error::other)?;
    let outcome = seed::prepare_article_store(&pool)
        .await
        .map_err(std::io::Error::other)?;
    info!(?outcome, "article store ready");

    server::create_server(ServerConfig::new(
        key,
        settings.cookie_secure,
        settings.bind_addr(),
        pool,
    ))?
    .await
}
