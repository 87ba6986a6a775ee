//! Configuration structures.
//!
//! Configuration is an explicit object passed into each component at
//! construction — the registry never reads an ambient schema path and the
//! execution engine never reads an ambient timeout at call time.

use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Manual harness configuration.
    #[serde(default)]
    pub manual: ManualConfig,
}

impl Config {
    /// Load configuration from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    Error::internal(format!(
                        "cannot read config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let config = serde_json::from_str(&raw)?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP gateway bind address.
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Path of the descriptor schema file loaded at startup.
    pub schema_path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("tools_schema.json"),
        }
    }
}

/// Execution engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Deadline applied when the caller does not pass one explicitly.
    #[serde(with = "humantime_serde")]
    pub default_timeout: Duration,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(5),
        }
    }
}

/// Manual harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualConfig {
    /// Per-command deadline during a survey run.
    #[serde(with = "humantime_serde")]
    pub command_timeout: Duration,

    /// Snapshot output path.
    pub output_path: PathBuf,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            command_timeout: Duration::from_secs(5),
            output_path: PathBuf::from("command_output.json"),
        }
    }
}
