//! Prompt-target declarations as they appear in `arch_config.yaml`.
//!
//! Only the `prompt_targets` section is read; the gateway's other sections
//! (listeners, endpoints, llm_providers, ...) are ignored. Fields that the
//! tool mapping requires are kept optional here and checked during
//! conversion, so a `default: true` target never needs them.
//!
//! Gateway configs are often written against YAML 1.1, so the boolean
//! flags also accept `yes`/`no`/`on`/`off` spellings.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
/// Pair with `#[serde(default)]`.
pub(crate) fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

fn parse_flag(text: &str) -> Option<bool> {
    match text {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Some(true),
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => Some(false),
        _ => None,
    }
}

fn yaml_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FlagRepr::Bool(flag)) => Ok(Some(flag)),
        Some(FlagRepr::Text(text)) => parse_flag(&text)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected a boolean, found {text:?}"))),
    }
}

/// The slice of the gateway config this crate cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchConfig {
    pub prompt_targets: Vec<PromptTarget>,
}

/// A declaratively configured action the assistant can invoke.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptTarget {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Marks the fallback route. Default targets are not exposed as tools.
    #[serde(default, deserialize_with = "yaml_flag")]
    pub default: Option<bool>,
    pub parameters: Option<Vec<ParamSpec>>,
}

impl PromptTarget {
    pub fn is_default(&self) -> bool {
        self.default.unwrap_or(false)
    }
}

/// One parameter of a prompt target.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamSpec {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "yaml_flag")]
    pub required: Option<bool>,
    #[serde(default, deserialize_with = "present_value")]
    pub default: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub format: Option<Value>,
    #[serde(rename = "enum", default, deserialize_with = "present_value")]
    pub enum_values: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub items: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub minimum: Option<Value>,
    #[serde(default, deserialize_with = "present_value")]
    pub maximum: Option<Value>,
}

impl ParamSpec {
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}
