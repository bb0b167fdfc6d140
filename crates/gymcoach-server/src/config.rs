//! Configuration for the server binary.
//!
//! All configuration is loaded from environment variables:
//!
//! - `HOST` -- bind address (default `0.0.0.0`)
//! - `PORT` -- listen port (default `8000`)
//! - `DATABASE_ENABLED` -- turn on the optional database integration
//!   (default `false`)
//! - `DATABASE_URL` -- `PostgreSQL` URL used when the integration is enabled
//! - `DATABASE_NAME` -- database name to report, overriding the URL's
//! - `DATABASE_CONNECT_TIMEOUT_SECS` -- pool acquire timeout (default `5`)

use std::time::Duration;

use gymcoach_api::ServerConfig;
use gymcoach_api::server::DEFAULT_PORT;
use gymcoach_db::PostgresConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be parsed.
    #[error("invalid {name}: {message}")]
    Invalid {
        /// The offending variable.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Database integration settings.
    pub database: DatabaseSettings,
}

/// Settings for the optional database integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Whether the integration is switched on at all.
    pub enabled: bool,
    /// Connection URL, if configured.
    pub url: Option<String>,
    /// Database name override, if configured.
    pub name: Option<String>,
    /// Pool acquire timeout.
    pub connect_timeout: Duration,
}

impl DatabaseSettings {
    /// The `PostgreSQL` configuration, when a URL is present.
    pub fn postgres_config(&self) -> Option<PostgresConfig> {
        self.url.as_deref().map(|url| {
            PostgresConfig::new(url)
                .with_database_name(self.name.clone())
                .with_connect_timeout(self.connect_timeout)
        })
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "PORT",
                message: format!("{e}"),
            })?;

        let enabled: bool = var("DATABASE_ENABLED")
            .unwrap_or_else(|| "false".to_owned())
            .to_lowercase()
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "DATABASE_ENABLED",
                message: format!("{e}"),
            })?;

        let connect_timeout_secs: u64 = var("DATABASE_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".to_owned())
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "DATABASE_CONNECT_TIMEOUT_SECS",
                message: format!("{e}"),
            })?;

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseSettings {
                enabled,
                url: var("DATABASE_URL"),
                name: var("DATABASE_NAME"),
                connect_timeout: Duration::from_secs(connect_timeout_secs),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServiceConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.server.port, 8000);
        assert!(!config.database.enabled);
        assert!(config.database.url.is_none());
        assert!(config.database.postgres_config().is_none());
        assert_eq!(config.database.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn port_and_host_are_read() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "9100")]).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid PORT"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load(&[("PORT", ""), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn database_settings_flow_into_postgres_config() {
        let config = load(&[
            ("DATABASE_ENABLED", "TRUE"),
            ("DATABASE_URL", "postgresql://db:5432/gym"),
            ("DATABASE_NAME", "coach"),
            ("DATABASE_CONNECT_TIMEOUT_SECS", "2"),
        ])
        .unwrap();
        assert!(config.database.enabled);

        let pg = config.database.postgres_config().unwrap();
        assert_eq!(pg.url, "postgresql://db:5432/gym");
        assert_eq!(pg.database_name.as_deref(), Some("coach"));
        assert_eq!(pg.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn invalid_enabled_flag_is_rejected() {
        let err = load(&[("DATABASE_ENABLED", "sometimes")]).unwrap_err();
        let ConfigError::Invalid { name, .. } = err;
        assert_eq!(name, "DATABASE_ENABLED");
    }
}
