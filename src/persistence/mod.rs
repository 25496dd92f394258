//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     connector.rs probes MongoDB with backoff.rs delays
//!     → success: service is fully operational
//!     → exhaustion: process exits with code 1
//!
//! Per request:
//!     store.rs inserts one ContactSubmission
//!     → write errors surface to the handler, never retried here
//! ```
//!
//! # Design Decisions
//! - The connector owns the attempt counter; nothing else mutates it
//! - Retry sleeps are cancellable so shutdown never leaves a pending timer
//! - The store is a trait so the HTTP layer tests without a live database

pub mod backoff;
pub mod connector;
pub mod store;

pub use backoff::retry_delay;
pub use connector::{ConnectOutcome, Connector};
pub use store::{MongoStore, StoreError, SubmissionStore};
