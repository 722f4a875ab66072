//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TLS-terminated connection
//!     → server.rs (Axum setup, middleware, method filtering)
//!     → resolver.rs (normalize path, resolve against document root)
//!     → mime.rs (content type from file extension)
//!     → respond with file bytes, or an error status (400/403/404)
//! ```

pub mod mime;
pub mod resolver;
pub mod server;

pub use server::HttpServer;
