// Runtime configuration read from the environment.
//
// Every key has a default except DATABASE_URL. Without it the service runs on
// empty in memory stores, which is only useful for local smoke tests.

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let database = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    lookup("DATABASE_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            }),
            None => None,
        };

        Ok(Self {
            host,
            port,
            database,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
