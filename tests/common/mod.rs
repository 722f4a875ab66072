//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rcgen::{generate_simple_self_signed, CertifiedKey};
use static_server::config::ServerConfig;
use static_server::http::HttpServer;
use static_server::lifecycle::Shutdown;
use static_server::net::listener::Listener;
use static_server::net::tls;
use tempfile::TempDir;

/// Create a document root populated with the standard fixtures.
pub fn make_doc_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.js"), "console.log('hi');").unwrap();
    std::fs::write(dir.path().join("assets/blob.xyz"), b"\x00\x01\x02binary").unwrap();
    dir
}

/// Write a self-signed certificate and key as a single combined PEM file,
/// returning the directory holding it and the file path.
pub fn write_combined_pem() -> (TempDir, PathBuf) {
    let CertifiedKey { cert, signing_key } =
        generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    let combined = format!("{}{}", cert.pem(), signing_key.serialize_pem());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.pem");
    std::fs::write(&path, combined).unwrap();
    (dir, path)
}

/// Write a self-signed certificate and key as two separate PEM files.
#[allow(dead_code)]
pub fn write_split_pem() -> (TempDir, PathBuf, PathBuf) {
    let CertifiedKey { cert, signing_key } =
        generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let cert_path = dir.path().join("cert.pem");
    let key_path = dir.path().join("key.pem");
    std::fs::write(&cert_path, cert.pem()).unwrap();
    std::fs::write(&key_path, signing_key.serialize_pem()).unwrap();
    (dir, cert_path, key_path)
}

/// Config for a test server on an ephemeral loopback port.
pub fn test_config(root: &Path, cert: &Path) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.listener.max_connections = 64;
    config.listener.tls.cert_path = cert.to_path_buf();
    config.content.root = root.to_path_buf();
    config
}

/// Spawn a server for the config, returning its address and a handle that
/// stops it when triggered.
pub async fn start_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    // The test binary links two rustls crypto providers (via reqwest and
    // axum-server); pick one explicitly.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let listener = Listener::bind(&config.listener).unwrap();
    let addr = listener.local_addr().unwrap();

    let tls_config = tls::load_tls_config(
        &config.listener.tls.cert_path,
        config.listener.tls.key_path.as_deref(),
    )
    .await
    .unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, tls_config, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(300)).await;

    (addr, shutdown)
}

/// HTTPS client that accepts the self-signed test certificate.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .no_proxy()
        .build()
        .unwrap()
}
