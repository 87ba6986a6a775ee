//! Core types for the toolgate service.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the server, registry, and
//!   manual harness

mod config;
mod errors;

pub use config::{
    Config, ExecutionConfig, ManualConfig, ObservabilityConfig, RegistryConfig, ServerConfig,
};
pub use errors::{Error, Result};
