//! TLS configuration and certificate loading.

use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

/// Error type for TLS setup.
#[derive(Debug)]
pub enum TlsError {
    /// Failed to read or parse a PEM file.
    Io(PathBuf, std::io::Error),
    /// The certificate file contained no certificates.
    NoCertificates(PathBuf),
    /// No private key was found where one was expected.
    NoPrivateKey(PathBuf),
}

impl std::fmt::Display for TlsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TlsError::Io(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
            TlsError::NoCertificates(path) => {
                write!(f, "No certificates found in {}", path.display())
            }
            TlsError::NoPrivateKey(path) => {
                write!(f, "No private key found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for TlsError {}

/// Load TLS configuration from PEM files.
///
/// With `key_path` absent, the private key is read from the certificate
/// file itself (single-file cert+key layout, the `server.pem` convention).
pub async fn load_tls_config(
    cert_path: &Path,
    key_path: Option<&Path>,
) -> Result<RustlsConfig, TlsError> {
    let cert_pem = tokio::fs::read(cert_path)
        .await
        .map_err(|e| TlsError::Io(cert_path.to_path_buf(), e))?;

    let certs = rustls_pemfile::certs(&mut cert_pem.as_slice())
        .map(|cert| cert.map(|der| der.as_ref().to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TlsError::Io(cert_path.to_path_buf(), e))?;
    if certs.is_empty() {
        return Err(TlsError::NoCertificates(cert_path.to_path_buf()));
    }

    let (key_source, key_pem) = match key_path {
        Some(path) => {
            let pem = tokio::fs::read(path)
                .await
                .map_err(|e| TlsError::Io(path.to_path_buf(), e))?;
            (path, pem)
        }
        None => (cert_path, cert_pem),
    };

    let key = rustls_pemfile::private_key(&mut key_pem.as_slice())
        .map_err(|e| TlsError::Io(key_source.to_path_buf(), e))?
        .ok_or_else(|| TlsError::NoPrivateKey(key_source.to_path_buf()))?;

    RustlsConfig::from_der(certs, key.secret_der().to_vec())
        .await
        .map_err(|e| TlsError::Io(cert_path.to_path_buf(), e))
}
