//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The store is described by its parts
//! (host, user, password, database, optional managed-instance socket)
//! rather than by a connection string.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (always all interfaces).
    pub listen_addr: SocketAddr,

    /// Store connection settings.
    pub database: DatabaseConfig,

    /// Tracing output format.
    pub log_format: LogFormat,
}

/// Connection settings for the relational store.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Hostname for TCP connections.
    pub host: String,

    /// Port for TCP connections (also names the Unix socket file).
    pub port: u16,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Database name.
    pub name: String,

    /// Unix socket directory of a managed instance. Takes precedence over
    /// `host` when set.
    pub socket_dir: Option<PathBuf>,

    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Describes where the pool connects, without credentials.
    #[must_use]
    pub fn target(&self) -> String {
        match &self.socket_dir {
            Some(dir) => format!("{}@unix:{}/{}", self.user, dir.display(), self.name),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("socket_dir", &self.socket_dir)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("invalid PORT {raw:?}: {e}"))?,
            None => 8080,
        };
        let listen_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

        let socket_root = lookup("DB_SOCKET_DIR").unwrap_or_else(|| "/cloudsql".to_string());
        let socket_dir = lookup("INSTANCE_CONNECTION_NAME")
            .filter(|name| !name.trim().is_empty())
            .map(|name| PathBuf::from(socket_root).join(name));

        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&lookup, "DB_PORT", 5432),
            user: lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
            password: lookup("DB_PASS").unwrap_or_default(),
            name: lookup("DB_NAME").unwrap_or_else(|| "school".to_string()),
            socket_dir,
            max_connections: parse_or(&lookup, "DB_POOL_SIZE", 10),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            database,
            log_format,
        })
    }
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
