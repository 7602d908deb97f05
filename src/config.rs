//! Command-line and environment configuration.

use crate::logging::LogLevel;
use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Serves the disc stacking puzzle over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "stackbot")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "STACKBOT_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// JSON file with the starting grid; the reference layout is used if omitted.
    #[arg(long, env = "STACKBOT_LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Minimum level of log events to write.
    #[arg(long, env = "STACKBOT_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr.
    #[arg(long, env = "STACKBOT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Truncate the log file once it would exceed this many bytes (0 = never).
    #[arg(long, default_value_t = 0)]
    pub log_max_bytes: u64,

    /// Origin allowed by CORS; repeat for several. Any origin if none given.
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address `{addr}`: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid CORS origin `{0}`")]
    Origin(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            layout: None,
            log_level: LogLevel::Info,
            log_file: None,
            log_max_bytes: 0,
            allow_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind.parse().map_err(|source| ConfigError::Bind {
            addr: self.bind.clone(),
            source,
        })
    }

    /// Allowed CORS origins as header values. Empty means any origin.
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allow_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Origin(origin.clone()))
            })
            .collect()
    }
}
