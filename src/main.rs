//! Static file server with TLS termination.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                STATIC SERVER                  │
//!                      │                                               │
//!   CLI flags ─────────┼─▶ config (TOML + overrides, validated) ──┐    │
//!                      │                                          ▼    │
//!   TLS client ────────┼─▶ net (bind + rustls) ─▶ http (resolver,      │
//!                      │                              mime, serve)     │
//!                      │                                          │    │
//!   SIGTERM/Ctrl-C ────┼─▶ lifecycle (shutdown) ◀────────────────┘     │
//!                      │                                               │
//!                      │   observability: tracing subscriber           │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! The serving core maps URL paths onto files below an immutable document
//! root, substituting an index file for directories and answering with a
//! content type inferred from the file extension. Paths that would escape
//! the root are rejected before any filesystem access.

use clap::Parser;

use static_server::config::cli::Args;
use static_server::http::HttpServer;
use static_server::lifecycle::{signals, Shutdown};
use static_server::net::listener::Listener;
use static_server::net::tls;
use static_server::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.into_config()?;

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        root = %config.content.root.display(),
        index_file = %config.content.index_file,
        "static-server v0.1.0 starting"
    );

    let tls_config = tls::load_tls_config(
        &config.listener.tls.cert_path,
        config.listener.tls.key_path.as_deref(),
    )
    .await?;

    let listener = Listener::bind(&config.listener)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, tls_config, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
