//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the document root and certificate files are present
//! - Validate value ranges (timeouts > 0, addresses parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("document root '{}' does not exist or is not a directory", .0.display())]
    DocumentRoot(PathBuf),

    #[error("certificate file '{}' does not exist", .0.display())]
    CertificateFile(PathBuf),

    #[error("private key file '{}' does not exist", .0.display())]
    KeyFile(PathBuf),

    #[error("index file name '{0}' must be a bare file name")]
    IndexFile(String),

    #[error("max_connections must be greater than zero")]
    MaxConnections,

    #[error("request timeout must be greater than zero")]
    RequestTimeout,

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Check a configuration for semantic errors, collecting every problem.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if !config.content.root.is_dir() {
        errors.push(ValidationError::DocumentRoot(config.content.root.clone()));
    }

    if !config.listener.tls.cert_path.is_file() {
        errors.push(ValidationError::CertificateFile(
            config.listener.tls.cert_path.clone(),
        ));
    }

    if let Some(key_path) = &config.listener.tls.key_path {
        if !key_path.is_file() {
            errors.push(ValidationError::KeyFile(key_path.clone()));
        }
    }

    let index = &config.content.index_file;
    if index.is_empty() || index.contains('/') || index.contains('\\') {
        errors.push(ValidationError::IndexFile(index.clone()));
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::MaxConnections);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    let level = config.observability.log_level.as_str();
    if !matches!(level, "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ValidationError::LogLevel(level.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
