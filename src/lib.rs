//! Contact Submission Backend
//!
//! A small HTTP service that accepts contact-form submissions, validates and
//! sanitizes them, and persists them to MongoDB.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                CONTACT API                   │
//!                    │                                              │
//!   POST /contact    │  ┌─────────┐   ┌────────────┐   ┌─────────┐ │
//!   ─────────────────┼─▶│  http   │──▶│   domain   │──▶│ persist │ │
//!                    │  │handlers │   │ validate + │   │  store  │ │
//!                    │  └─────────┘   │  sanitize  │   └────┬────┘ │
//!                    │                └────────────┘        │      │
//!                    │                                      ▼      │
//!                    │  ┌────────────────────────────┐ ┌─────────┐ │
//!                    │  │   Cross-Cutting Concerns   │ │ MongoDB │ │
//!                    │  │ ┌────────┐ ┌─────────────┐ │ └─────────┘ │
//!                    │  │ │ config │ │observability│ │      ▲      │
//!                    │  │ └────────┘ └─────────────┘ │      │      │
//!                    │  │ ┌───────────┐ ┌─────────┐  │      │      │
//!                    │  │ │ lifecycle │ │connector│──┼──────┘      │
//!                    │  │ └───────────┘ └─────────┘  │  startup    │
//!                    │  └────────────────────────────┘  probe      │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The persistence connector runs once at startup, outside the request path,
//! and retries the initial database probe with exponential backoff. Request
//! handling never retries on the caller's behalf.

// Core subsystems
pub mod config;
pub mod domain;
pub mod http;
pub mod persistence;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
