//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (clap)
//!     + config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → cli.rs (flag overrides)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so an empty config is runnable
//! - Validation separates syntactic (serde) from semantic checks

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ContentConfig;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
pub use schema::TlsConfig;
