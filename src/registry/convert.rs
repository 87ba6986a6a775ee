//! Schema conversion — list form to the mapping form the registry loads.
//!
//! Descriptor collections are sometimes authored as a JSON array. The
//! registry requires an object keyed by tool name, so this pass re-keys the
//! array and rejects entries that would collide or be unreachable.

use crate::registry::descriptor::ToolDescriptor;
use crate::types::{Error, Result};
use serde_json::{Map, Value};

/// Convert a JSON array of descriptors into a mapping keyed by `tool_name`.
///
/// Entry order is preserved. Empty or duplicate names are schema errors —
/// a duplicate would silently shadow an earlier entry once keyed.
pub fn list_to_mapping(raw: &str) -> Result<String> {
    let descriptors: Vec<ToolDescriptor> = serde_json::from_str(raw)
        .map_err(|e| Error::schema(format!("input is not a descriptor array: {}", e)))?;

    let mut map = Map::with_capacity(descriptors.len());
    for descriptor in descriptors {
        descriptor.validate()?;
        if map.contains_key(&descriptor.tool_name) {
            return Err(Error::schema(format!(
                "duplicate tool_name '{}'",
                descriptor.tool_name
            )));
        }
        let name = descriptor.tool_name.clone();
        map.insert(name, serde_json::to_value(descriptor)?);
    }

    let pretty = serde_json::to_string_pretty(&Value::Object(map))?;
    Ok(pretty)
}
