//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration for the contact service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// TCP port the HTTP listener binds on (env: `PORT`).
    pub port: u16,

    /// MongoDB connection string (env: `MONGO_URI`). Required.
    pub mongo_uri: String,

    /// Database holding the submissions collection. Taken from the URI path
    /// when present, otherwise `contact`.
    pub database: String,

    /// Maximum consecutive connection attempts before the process gives up
    /// (env: `MAX_RETRIES`).
    pub max_retries: u32,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_DATABASE: &str = "contact";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
