//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Bind listener → Spawn connector → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain requests → Close client → Exit 0
//!
//! Signals (signals.rs):
//!     SIGINT / SIGTERM / SIGHUP → identical graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One broadcast channel fans the shutdown signal out to the server and
//!   the connector's pending retry timer
//! - Bind failure and retry exhaustion exit with code 1, graceful exit is 0

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
