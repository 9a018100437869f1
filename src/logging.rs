//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout and stderr, so it logs to a file. Headless
//! mode uses stdout for the wire protocol and logs to stderr instead.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// File from config, or the default log path.
    pub fn file_from(config: &LoggingConfig) -> Self {
        let path = config
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::default_log_path);
        LogTarget::File(path)
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `config.level`.
///
/// Calling this twice keeps the first subscriber.
pub fn init_tracing(config: &LoggingConfig, target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    let result = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}
