//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → listener.rs (bind configured address, fatal on failure)
//!     → tls.rs (load certificate/key, build rustls server config)
//!     → hand both to the HTTP layer's rustls acceptor
//!
//! Per connection, the acceptor performs the TLS handshake; a failed
//! handshake drops that connection only.
//! ```
//!
//! # Design Decisions
//! - Bind and certificate errors are fatal at startup
//! - Handshake failures are isolated per connection
//! - A single certificate file may carry both cert and key

pub mod listener;
pub mod tls;
