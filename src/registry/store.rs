//! In-memory registry — insertion-ordered descriptor index keyed by tool name.
//!
//! Built once from a persisted schema file, immutable during serving, and
//! replaced wholesale on rebuild (never patched field-by-field while
//! serving), so concurrent readers cannot observe a half-updated descriptor.

use crate::registry::descriptor::{ToolDescriptor, ToolSummary};
use crate::types::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Ordered index of tool descriptors.
///
/// Listing follows the schema file's key order — callers must not assume
/// alphabetical order. Lookup is exact-match and case-sensitive.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Load the registry from a schema file.
    ///
    /// Any schema violation fails the whole load; there are no partial
    /// registries.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::schema(format!("cannot read schema file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a registry from raw schema JSON.
    ///
    /// The source must be a JSON object keyed by tool name, each value a
    /// descriptor whose `tool_name` matches its key.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(raw)
            .map_err(|e| Error::schema(format!("schema file is not valid JSON: {}", e)))?;

        let Value::Object(map) = root else {
            return Err(Error::schema(
                "schema root must be a JSON object keyed by tool name",
            ));
        };

        let mut registry = Self {
            entries: Vec::with_capacity(map.len()),
            index: HashMap::with_capacity(map.len()),
        };

        // serde_json's preserve_order keeps map iteration in file order.
        for (name, value) in map {
            let descriptor: ToolDescriptor = serde_json::from_value(value)
                .map_err(|e| Error::schema(format!("invalid descriptor for '{}': {}", name, e)))?;
            descriptor.validate()?;
            if descriptor.tool_name != name {
                return Err(Error::schema(format!(
                    "schema key '{}' does not match tool_name '{}'",
                    name, descriptor.tool_name
                )));
            }
            registry.insert(descriptor)?;
        }

        Ok(registry)
    }

    fn insert(&mut self, descriptor: ToolDescriptor) -> Result<()> {
        if self.index.contains_key(&descriptor.tool_name) {
            return Err(Error::schema(format!(
                "duplicate tool_name '{}'",
                descriptor.tool_name
            )));
        }
        self.index
            .insert(descriptor.tool_name.clone(), self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    /// Get a descriptor by exact name.
    pub fn get(&self, name: &str) -> Result<&ToolDescriptor> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| Error::not_found(format!("Tool '{}' not found", name)))
    }

    /// Check if a tool exists.
    pub fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// List all tools as `{tool_name, description}` pairs, in load order.
    pub fn list(&self) -> Vec<ToolSummary> {
        self.entries.iter().map(ToolDescriptor::summary).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
