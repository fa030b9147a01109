//! # Logging
//!
//! Installs the global `tracing` subscriber described by a [`LoggingConfig`].
//!
//! The library itself only emits events; nothing is printed until the host
//! application calls [`init_logging`]. `RUST_LOG`, when set, takes precedence
//! over the configured level.
//!
//! ## Usage
//! ```rust,no_run
//! use packet_reader::config::LoggingConfig;
//! use packet_reader::utils::logging::init_logging;
//!
//! init_logging(&LoggingConfig::default()).expect("logging");
//! ```

use crate::config::LoggingConfig;
use crate::error::{PacketError, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber for `config`.
///
/// # Errors
/// Returns `PacketError::ConfigError` if the configuration is invalid or a
/// global subscriber is already installed, and `PacketError::Io` if the log
/// file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(PacketError::ConfigError(errors.join("; ")));
    }

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer(config)?)
        .with_ansi(!config.log_to_file);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| {
        PacketError::ConfigError(format!("Failed to install log subscriber: {e}"))
    })?;

    tracing::debug!(app = %config.app_name, log_level = %config.log_level, "logging initialized");
    Ok(())
}

/// Build the output sink: console, file, or both.
fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    let file = if config.log_to_file {
        let path = config.log_file_path.as_deref().ok_or_else(|| {
            PacketError::ConfigError("log_file_path must be set when log_to_file is true".into())
        })?;
        Some(Arc::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        ))
    } else {
        None
    };

    Ok(match (config.log_to_console, file) {
        (true, Some(file)) => BoxMakeWriter::new(std::io::stderr.and(file)),
        (false, Some(file)) => BoxMakeWriter::new(file),
        (_, None) => BoxMakeWriter::new(std::io::stderr),
    })
}
