//! Tool schema types produced from prompt targets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt_targets::present_value;

/// JSON-schema description of a single tool parameter.
///
/// An attribute set to `null` in the config is kept and serialized as
/// `null`; only attributes missing from the config are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<Value>,
    #[serde(
        rename = "enum",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub enum_values: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub maximum: Option<Value>,
}

/// Object schema for a tool's arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, PropertySchema>,
    /// Required parameter names, in declaration order.
    pub required: Vec<String>,
}

impl Default for ParametersSchema {
    fn default() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

/// Tool description keyed by name inside a [`ToolCatalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub description: String,
    pub parameters: ParametersSchema,
}

/// Mapping from tool name to its description and argument schema.
///
/// Serializes as a plain JSON object keyed by tool name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolCatalog(BTreeMap<String, ToolInfo>);

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tool. A later tool with the same name replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, info: ToolInfo) {
        self.0.insert(name.into(), info);
    }

    pub fn get(&self, name: &str) -> Option<&ToolInfo> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToolInfo)> {
        self.0.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Render the catalog as the `tools` array of a chat-completion request.
    pub fn to_openai_tools(&self) -> Vec<Value> {
        self.iter()
            .map(|(name, info)| {
                serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": name,
                        "description": info.description,
                        "parameters": info.parameters,
                    }
                })
            })
            .collect()
    }
}
