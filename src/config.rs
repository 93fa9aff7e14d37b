// src/config.rs
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use http::HeaderValue;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// `None` runs the service on the in-memory store
    pub database: Option<DatabaseConfig>,
    /// Allowed browser origin; any origin when unset
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&lookup, "PORT", 3030)?;

        let database = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
                acquire_timeout_secs: parse_or(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", 5)?,
            }),
            None => None,
        };

        let cors_origin = match lookup("CORS_ORIGIN").filter(|origin| !origin.is_empty()) {
            Some(origin) => Some(HeaderValue::from_str(&origin).map_err(|_| {
                ConfigError::Invalid {
                    name: "CORS_ORIGIN",
                    value: origin.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            host,
            port,
            database,
            cors_origin,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_database() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3030);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3030");
        assert_eq!(config.database, None);
        assert_eq!(config.cors_origin, None);
    }

    #[test]
    fn reads_database_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/polls"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("CORS_ORIGIN", "http://localhost:3000"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/polls");
        assert_eq!(db.max_connections, 12);
        assert_eq!(db.acquire_timeout_secs, 5);
        assert_eq!(
            config.cors_origin,
            Some(HeaderValue::from_static("http://localhost:3000"))
        );
    }

    #[test]
    fn invalid_numbers_name_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".into()
            }
        );

        let err = Config::from_lookup(lookup_from(&[("CORS_ORIGIN", "http://bad\norigin")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "CORS_ORIGIN", .. }));
    }
}
