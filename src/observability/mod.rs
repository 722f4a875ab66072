//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - tracing crate for structured events with named fields
//! - RUST_LOG overrides the configured level
//! - Per-request events stay at debug/trace; startup and errors at info+

pub mod logging;
