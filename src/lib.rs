//! # Toolgate - Command-Line Tool Catalog Gateway
//!
//! Registry-driven gateway exposing a catalog of external command-line tools:
//! - Descriptor model normalizing heterogeneous CLI interfaces into one schema
//! - In-memory registry loaded once from a schema file, read-mostly thereafter
//! - Execution engine running external commands under a deadline, with every
//!   outcome classified into a value (no exceptions cross its boundary)
//! - Manual builder surveying a list of tools via their `-h` help output
//! - HTTP lookup gateway answering list/describe queries
//!
//! ## Architecture
//!
//! ```text
//!   GET /tools ──────┐
//!   GET /tool/{name} ├─► │ Lookup Gateway │ ──► │ Registry │ ◄── schema file
//!                    ┘   └────────────────┘     └──────────┘
//!
//!   build-manual ──► │ Manual Builder │ ──► │ Execution Engine │ ──► snapshot
//!                    └────────────────┘     └──────────────────┘
//! ```
//!
//! The gateway is describe-only: describing a tool never runs it. The
//! execution engine is reached exclusively through the manual builder.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod exec;
pub mod gateway;
pub mod manual;
pub mod registry;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
