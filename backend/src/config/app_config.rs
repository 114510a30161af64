use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "database.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
    #[error("{name} must be a boolean, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub sentry_dsn: Option<String>,
    pub environment: String, // 'development' locally, anything else in prod
    pub seed_sample_data: bool,
    pub static_dir: Option<String>, // built frontend to serve as fallback
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // empty values count as unset so `FOO=` in .env falls back to the default
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let seed_sample_data = match get("SEED_SAMPLE_DATA") {
            Some(value) => parse_bool("SEED_SAMPLE_DATA", &value)?,
            None => true,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            sentry_dsn: get("SENTRY_DSN"),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            seed_sample_data,
            static_dir: get("STATIC_DIR"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "database.db");
        assert_eq!(config.bind_addr, "0.0.0.0:8001".parse().unwrap());
        assert!(config.sentry_dsn.is_none());
        assert!(config.seed_sample_data);
        assert!(config.is_development());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "/var/lib/astro/site.db"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("ENVIRONMENT", "production"),
            ("SEED_SAMPLE_DATA", "no"),
            ("STATIC_DIR", "frontend/dist"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "/var/lib/astro/site.db");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
        assert!(!config.is_development());
        assert!(!config.seed_sample_data);
        assert_eq!(config.static_dir.as_deref(), Some("frontend/dist"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("DATABASE_URL", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(ref v) if v == "localhost"));
    }

    #[test]
    fn rejects_bad_bool() {
        let err = config_from(&[("SEED_SAMPLE_DATA", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { name: "SEED_SAMPLE_DATA", .. }));
    }
}
