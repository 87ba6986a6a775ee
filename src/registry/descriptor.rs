//! Tool descriptor schema — the normalized shape of one external tool.
//!
//! Heterogeneous command-line interfaces (positional arguments, flags,
//! worked examples) are reduced to this one schema so a generic caller can
//! reason about any tool without special-casing it.

use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};

/// A positional argument of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    pub name: String,
    pub required: bool,
    pub description: String,
}

/// A flag option of a tool. `parameter_name` is present iff the flag takes
/// a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub flag: String,
    pub has_parameter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    pub description: String,
}

/// A worked invocation example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
    pub command: String,
    pub description: String,
}

/// Complete descriptor entry for one external tool.
///
/// `tool_name` and `description` are mandatory; every other field defaults
/// to empty. Sequence fields are ordered — order may convey priority and is
/// preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub tool_name: String,
    pub description: String,
    #[serde(default)]
    pub usage_template: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<ArgumentSpec>,
    #[serde(default)]
    pub options: Vec<OptionSpec>,
    #[serde(default)]
    pub examples: Vec<UsageExample>,
}

impl ToolDescriptor {
    /// Check structural invariants that serde alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.tool_name.is_empty() {
            return Err(Error::schema("tool_name cannot be empty"));
        }
        for option in &self.options {
            if option.has_parameter && option.parameter_name.is_none() {
                return Err(Error::schema(format!(
                    "tool '{}': option '{}' has_parameter but no parameter_name",
                    self.tool_name, option.flag
                )));
            }
            if !option.has_parameter && option.parameter_name.is_some() {
                return Err(Error::schema(format!(
                    "tool '{}': option '{}' carries a parameter_name without has_parameter",
                    self.tool_name, option.flag
                )));
            }
        }
        Ok(())
    }

    /// Reduce to the listing form served by `GET /tools`.
    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            tool_name: self.tool_name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Listing entry: name and description only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    pub tool_name: String,
    pub description: String,
}
