//! Logging configuration
//!
//! Stdout carries protocol traffic, so every layer writes to stderr.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,     // fallback filter when RUST_LOG is unset
    pub json_format: bool, // one JSON object per event
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Build the filter, preferring RUST_LOG over the configured level
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global subscriber
    pub fn init(&self) -> Result<(), tracing_subscriber::util::TryInitError> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        if self.json_format {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_current_span(false)
                        .with_writer(io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(io::stderr),
                )
                .try_init()
        }
    }
}
