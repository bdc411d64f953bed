//! Application configuration loaded via OrthoConfig.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "articles.db";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// Configuration values controlling the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "READMETER")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// SQLite database path backing the article store.
    pub database_url: Option<String>,
    /// File holding the session cookie signing secret.
    pub session_key_file: Option<PathBuf>,
    /// Mark the session cookie `Secure` so browsers send it over HTTPS only.
    #[ortho_config(default = false)]
    pub cookie_secure: bool,
}

impl AppSettings {
    /// Return the configured bind address, falling back to localhost.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the configured database path, falling back to `articles.db`.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured session key path, falling back to the runtime
    /// secrets location.
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }
}
