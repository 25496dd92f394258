//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (read & parse variables)
//!     → AppConfig (validated, immutable)
//!     → shared with http / persistence at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload path
//! - PORT and MAX_RETRIES have defaults, MONGO_URI is mandatory
//! - Parse failures are fatal and reported before anything binds

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
