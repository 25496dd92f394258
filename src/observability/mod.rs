//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; level set with RUST_LOG
//! - Client validation failures log at debug, never as server faults
//! - No metrics surface; structured logs are the whole story here

pub mod logging;
