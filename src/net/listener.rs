//! TCP listener binding.
//!
//! # Responsibilities
//! - Parse and bind the configured address
//! - Fail fast with a diagnostic when the port is unavailable
//! - Hand the socket to the TLS acceptor

use std::net::SocketAddr;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// The configured bind address did not parse.
    InvalidAddress(std::net::AddrParseError),
    /// Failed to bind to address.
    Bind(SocketAddr, std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::InvalidAddress(e) => write!(f, "Invalid bind address: {}", e),
            ListenerError::Bind(addr, e) => write!(f, "Failed to bind {}: {}", addr, e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// A bound TCP listener, ready to be wrapped by the TLS acceptor.
#[derive(Debug)]
pub struct Listener {
    inner: std::net::TcpListener,
}

impl Listener {
    /// Bind to the configured address.
    pub fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr: SocketAddr = config
            .bind_address
            .parse()
            .map_err(ListenerError::InvalidAddress)?;

        let listener =
            std::net::TcpListener::bind(addr).map_err(|e| ListenerError::Bind(addr, e))?;

        // The tokio-driven acceptor requires a nonblocking socket.
        listener
            .set_nonblocking(true)
            .map_err(|e| ListenerError::Bind(addr, e))?;

        let local_addr = listener.local_addr().map_err(|e| ListenerError::Bind(addr, e))?;

        tracing::info!(
            address = %local_addr,
            max_connections = config.max_connections,
            "Listener bound"
        );

        Ok(Self { inner: listener })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }

    /// Release the underlying socket for the acceptor.
    pub fn into_std(self) -> std::net::TcpListener {
        self.inner
    }
}
