//! Tool registry — descriptor schema, ordered index, schema conversion.
//!
//! The registry is intentionally a pure data index: storage and retrieval
//! only, so the execution engine and the lookup gateway can be tested
//! independently of it.

pub mod convert;
pub mod descriptor;
pub mod store;

pub use convert::list_to_mapping;
pub use descriptor::{ArgumentSpec, OptionSpec, ToolDescriptor, ToolSummary, UsageExample};
pub use store::Registry;
