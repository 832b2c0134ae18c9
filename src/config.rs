//! Application configuration
//!
//! Loaded from a TOML file; every section and field falls back to its
//! default when missing.
//!
//! ```toml
//! [server]
//! api_host = "0.0.0.0"
//! api_port = 8080
//!
//! [database]
//! url = "sqlite://./market.db?mode=rwc"
//!
//! [auth]
//! principal_header = "username"
//! default_principal = "admin@market.local"
//!
//! [logging]
//! level = "info"
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use axum::http::HeaderName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::seed::ADMIN_EMAIL;
use crate::infrastructure::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default config location: `~/.config/market-service/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("market-service")
        .join("config.toml")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    /// Use the dashmap-backed store instead of a database
    pub in_memory: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DatabaseConfig::default().url,
            in_memory: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Request header carrying the principal (account email)
    pub principal_header: String,
    /// Principal used when the header is missing or blank
    pub default_principal: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            principal_header: "username".to_string(),
            default_principal: ADMIN_EMAIL.to_string(),
        }
    }
}

impl AuthConfig {
    pub fn header_name(&self) -> Result<HeaderName, ConfigError> {
        HeaderName::from_bytes(self.principal_header.to_lowercase().as_bytes()).map_err(|_| {
            ConfigError::Invalid(format!(
                "auth.principal_header '{}' is not a valid header name",
                self.principal_header
            ))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `RUST_LOG`-style filter; `RUST_LOG` itself wins when set
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.api_port == 0 {
            return Err(ConfigError::Invalid("server.api_port must be non-zero".into()));
        }
        if self.auth.default_principal.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "auth.default_principal must not be empty".into(),
            ));
        }
        self.auth.header_name()?;
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.server.api_host, self.server.api_port)
    }

    /// SeaORM settings; unused when `database.in_memory` is set
    pub fn database_config(&self, run_migrations: bool) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            run_migrations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9090

            [auth]
            default_principal = "customer@market.local"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.api_port, 9090);
        assert_eq!(config.server.api_host, "0.0.0.0");
        assert_eq!(config.auth.principal_header, "username");
        assert_eq!(config.auth.default_principal, "customer@market.local");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.auth.principal_header = "bad header".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn database_config_carries_url_and_migration_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.database_config(true).url, "sqlite://./market.db?mode=rwc");

        config.database.url = "sqlite::memory:".into();
        let db = config.database_config(false);
        assert_eq!(db.url, "sqlite::memory:");
        assert!(!db.run_migrations);
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("market-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");
        let mut config = AppConfig::default();
        config.server.api_port = 8181;

        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.server.api_port, 8181);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
