//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;

use crate::config::schema::{
    AppConfig, DEFAULT_DATABASE, DEFAULT_MAX_RETRIES, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MONGO_URI is not set")]
    MissingMongoUri,

    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("MAX_RETRIES must be at least 1")]
    ZeroRetries,
}

/// Load and validate configuration from the environment.
///
/// `.env` loading (via dotenvy) is the caller's responsibility so tests can
/// drive this function with plain variables.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    build_config(
        env::var("PORT").ok(),
        env::var("MONGO_URI").ok(),
        env::var("MAX_RETRIES").ok(),
    )
}

/// Pure assembly step behind [`load_config`].
pub fn build_config(
    port: Option<String>,
    mongo_uri: Option<String>,
    max_retries: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let port = match port {
        Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
            name: "PORT",
            value: raw,
        })?,
        None => DEFAULT_PORT,
    };

    let mongo_uri = mongo_uri.ok_or(ConfigError::MissingMongoUri)?;

    let max_retries = match max_retries {
        Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
            name: "MAX_RETRIES",
            value: raw,
        })?,
        None => DEFAULT_MAX_RETRIES,
    };
    if max_retries == 0 {
        return Err(ConfigError::ZeroRetries);
    }

    let database = database_from_uri(&mongo_uri).unwrap_or_else(|| DEFAULT_DATABASE.to_string());

    Ok(AppConfig {
        port,
        mongo_uri,
        database,
        max_retries,
        request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
    })
}

/// Extract the database name from a MongoDB connection string, if present.
///
/// `mongodb://host:27017/contact?retryWrites=true` → `contact`
fn database_from_uri(uri: &str) -> Option<String> {
    let after_scheme = uri.splitn(2, "://").nth(1)?;
    let path = after_scheme.splitn(2, '/').nth(1)?;
    let name = path.split('?').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_when_vars_absent() {
        let config =
            build_config(None, Some("mongodb://localhost:27017".into()), None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.database, DEFAULT_DATABASE);
    }

    #[test]
    fn missing_mongo_uri_is_an_error() {
        let err = build_config(None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingMongoUri));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = build_config(
            Some("not-a-port".into()),
            Some("mongodb://localhost:27017".into()),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { name: "PORT", .. }));
    }

    #[test]
    fn zero_retries_is_rejected() {
        let err = build_config(
            None,
            Some("mongodb://localhost:27017".into()),
            Some("0".into()),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroRetries));
    }

    #[test]
    fn database_name_taken_from_uri_path() {
        let config = build_config(
            None,
            Some("mongodb://localhost:27017/inbox?retryWrites=true".into()),
            None,
        )
        .unwrap();
        assert_eq!(config.database, "inbox");
    }
}
