// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Logging setup.
//!
//! Structured logging through `tracing`. Logs go to stderr so that stdout
//! carries only results. The `POFFIN_LOG` environment variable, when set,
//! replaces the configured filter entirely.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "POFFIN_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Colored output (text format only)
    pub color: bool,

    /// Module-specific log levels
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
            color: true,
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.format != "json" && self.format != "text" {
            return Err(SearchError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.format
            )));
        }
        build_filter(self, None).map(|_| ())
    }
}

/// Build the filter from the override (normally `POFFIN_LOG`) or the config.
fn build_filter(config: &LoggingConfig, env_override: Option<String>) -> Result<EnvFilter> {
    if let Some(directives) = env_override {
        return EnvFilter::try_new(&directives)
            .map_err(|e| SearchError::Logging(format!("Invalid {}: {}", LOG_ENV, e)));
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }
    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| SearchError::Logging(format!("Invalid log level '{}': {}", config.level, e)))?;
    for (module, level) in &config.modules {
        let directive = format!("{}={}", module, level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| SearchError::Logging(format!("Invalid log directive: {}", e)))?,
        );
    }
    Ok(filter)
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails on an invalid filter or format, or if a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    config.validate()?;
    let filter = build_filter(config, std::env::var(LOG_ENV).ok())?;
    let registry = Registry::default().with(filter);

    let result = if config.format == "json" {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| SearchError::Logging(e.to_string()))
}
