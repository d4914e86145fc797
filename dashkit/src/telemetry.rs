// dashkit/src/telemetry.rs
//
// Tracing subscriber setup. A full-screen terminal UI owns stdout/stderr, so
// interactive sessions only log when a log file is configured.
//

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::errors::{DashError, DashResult};

/// Where logs go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    Disabled,
}

pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(config: &ObservabilityConfig, fallback: LogSink) -> DashResult<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| DashError::ConfigError(format!("cannot open log file {}: {}", path, e)))?;

        tracing_subscriber::registry()
            .with(env_filter(config))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
            .map_err(|e| DashError::Unknown(e.to_string()))?;
        debug!(path = %path, level = %config.log_level, "Logging to file");
        return Ok(());
    }

    match fallback {
        LogSink::Stderr => tracing_subscriber::registry()
            .with(env_filter(config))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| DashError::Unknown(e.to_string())),
        LogSink::Disabled => Ok(()),
    }
}
