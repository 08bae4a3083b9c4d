use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::advisory::catalog::{ActionCatalog, CatalogError};
use crate::advisory::grid::{GridAreaError, GridConstrainedAreas};
use crate::advisory::plan::DEFAULT_TOP_PICKS;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let top_picks = match env::var("GRIDWISE_TOP_PICKS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidTopPicks)?,
            Err(_) => DEFAULT_TOP_PICKS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: DataConfig {
                catalog_path: optional_path("GRIDWISE_CATALOG_PATH"),
                grid_areas_path: optional_path("GRIDWISE_GRID_AREAS_PATH"),
                top_picks,
            },
        })
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Reference data sources. Unset paths fall back to the bundled resources.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub catalog_path: Option<PathBuf>,
    pub grid_areas_path: Option<PathBuf>,
    pub top_picks: usize,
}

impl DataConfig {
    pub fn load_catalog(&self) -> Result<ActionCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => ActionCatalog::from_path(path),
            None => ActionCatalog::standard(),
        }
    }

    pub fn load_grid_areas(&self) -> Result<GridConstrainedAreas, GridAreaError> {
        match &self.grid_areas_path {
            Some(path) => GridConstrainedAreas::from_path(path),
            None => GridConstrainedAreas::standard(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            grid_areas_path: None,
            top_picks: DEFAULT_TOP_PICKS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTopPicks,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTopPicks => {
                write!(f, "GRIDWISE_TOP_PICKS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTopPicks => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("GRIDWISE_CATALOG_PATH");
        env::remove_var("GRIDWISE_GRID_AREAS_PATH");
        env::remove_var("GRIDWISE_TOP_PICKS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.data.catalog_path.is_none());
        assert!(config.data.grid_areas_path.is_none());
        assert_eq!(config.data.top_picks, DEFAULT_TOP_PICKS);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_zero_top_picks() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GRIDWISE_TOP_PICKS", "0");
        let err = AppConfig::load().expect_err("zero top picks rejected");
        assert!(matches!(err, ConfigError::InvalidTopPicks));
        reset_env();
    }

    #[test]
    fn reads_data_paths_and_ignores_blank_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GRIDWISE_CATALOG_PATH", "/etc/gridwise/actions.json");
        env::set_var("GRIDWISE_GRID_AREAS_PATH", "   ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.data.catalog_path,
            Some(PathBuf::from("/etc/gridwise/actions.json"))
        );
        assert!(config.data.grid_areas_path.is_none());
        reset_env();
    }

    #[test]
    fn default_data_config_loads_bundled_resources() {
        let data = DataConfig::default();
        assert!(data.load_catalog().expect("catalog loads").len() > 0);
        assert!(!data.load_grid_areas().expect("grid list loads").is_empty());
    }
}
