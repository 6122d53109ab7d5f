//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level for the `chorus*` targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive covering every chorus crate.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "chorus=trace",
            LogLevel::Debug => "chorus=debug",
            LogLevel::Info => "chorus=info",
            LogLevel::Warn => "chorus=warn",
            LogLevel::Error => "chorus=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
