//! Command-line interface.
//!
//! Every flag is optional; the defaults reproduce the fixed constants the
//! server historically ran with (bind 0.0.0.0:443, document root one level
//! up, `server.pem` in the working directory).

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{self, ConfigError};
use crate::config::schema::ServerConfig;
use crate::config::validation::validate_config;

/// Static file server with TLS termination.
#[derive(Debug, Parser)]
#[command(name = "static-server", version, about)]
pub struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:443.
    #[arg(long)]
    pub bind: Option<String>,

    /// Document root directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Certificate file (PEM). May also contain the private key.
    #[arg(long)]
    pub cert: Option<PathBuf>,

    /// Private key file (PEM). Defaults to reading the key from the
    /// certificate file.
    #[arg(long)]
    pub key: Option<PathBuf>,

    /// Index file served for directory requests.
    #[arg(long)]
    pub index: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable extension-based content-type detection; every response is
    /// served as application/octet-stream.
    #[arg(long)]
    pub no_mime_detection: bool,
}

impl Args {
    /// Resolve the optional config file and flag overrides into a
    /// validated configuration. Flags win over file values.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
                loader::parse_config(&content)?
            }
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(root) = self.root {
            config.content.root = root;
        }
        if let Some(cert) = self.cert {
            config.listener.tls.cert_path = cert;
        }
        if let Some(key) = self.key {
            config.listener.tls.key_path = Some(key);
        }
        if let Some(index) = self.index {
            config.content.index_file = index;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if self.no_mime_detection {
            config.content.mime_detection = false;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
