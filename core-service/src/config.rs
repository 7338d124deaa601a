use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///app.db";

/// Service settings read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl ServiceConfig {
    /// Loads settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: std::env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SERVICE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5555),
            pool_size: std::env::var("DATABASE_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(8),
        }
    }

    /// Settings pointing at the given database, for tests.
    pub fn for_test(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: "127.0.0.1".to_string(),
            port: 0,
            pool_size: 2,
        }
    }

    /// Filesystem path handed to SQLite.
    pub fn database_path(&self) -> &str {
        sqlite_path(&self.database_url)
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", self.host, self.port, e))
    }
}

/// Strips a `sqlite://` scheme. `sqlite:///app.db` is relative, `sqlite:////var/x.db` absolute.
pub fn sqlite_path(url: &str) -> &str {
    match url.strip_prefix("sqlite://") {
        Some(rest) if rest.starts_with("//") => &rest[1..],
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => url.strip_prefix("sqlite:").unwrap_or(url),
    }
}
