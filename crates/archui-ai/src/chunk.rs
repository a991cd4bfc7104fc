//! Streamed `chat.completion.chunk` payloads.

use archui_common::StreamError;
use serde::{Deserialize, Serialize};

use crate::history::Role;

/// Sentinel data payload that ends an OpenAI-style stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One fragment of a streamed chat-completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub delta: Delta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Incremental payload: whatever changed since the previous chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// A tool invocation as it appears in a streamed delta.
///
/// Every field is optional because providers stream tool calls piecewise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<FunctionCall>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Usually a JSON-encoded string; some gateways send an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl ChatCompletionChunk {
    /// Delta of the first choice. Only the first choice is tracked.
    pub fn delta(&self) -> Option<&Delta> {
        self.choices.first().map(|choice| &choice.delta)
    }
}

/// Decode one event payload. Returns `None` for the `[DONE]` sentinel.
pub fn decode_chunk(data: &str) -> Result<Option<ChatCompletionChunk>, StreamError> {
    let data = data.trim();
    if data == DONE_SENTINEL {
        return Ok(None);
    }
    serde_json::from_str(data)
        .map(Some)
        .map_err(|e| StreamError::Decode(e.to_string()))
}
