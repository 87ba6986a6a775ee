//! Manual harness — batch survey of tool help output.
//!
//! The builder drives the execution engine across an ordered list of tool
//! names; the store holds the results keyed by the literal command string
//! and persists them as one wholesale snapshot.

pub mod builder;
pub mod store;

pub use builder::ManualBuilder;
pub use store::ManualStore;

use crate::types::{Error, Result};
use std::path::Path;

/// Read an ordered command list: one bare tool name per line, blank lines
/// and `#` comments skipped.
pub fn read_command_list(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        Error::internal(format!(
            "cannot read command list {}: {}",
            path.display(),
            e
        ))
    })?;

    let names: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(Error::validation(format!(
            "command list {} contains no tool names",
            path.display()
        )));
    }
    Ok(names)
}
