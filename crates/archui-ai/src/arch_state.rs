//! Gateway state envelope carried in response metadata.
//!
//! The gateway attaches its own view of the conversation to a response as
//! `metadata["x-arch-state"]`: a JSON-encoded object whose `messages` field
//! is itself a JSON-encoded array. Both levels are decoded here. Malformed
//! JSON at either level is returned to the caller.

use archui_common::StateError;
use serde_json::Value;

use crate::history::HistoryEntry;

/// Metadata key holding the gateway state.
pub const ARCH_STATE_HEADER: &str = "x-arch-state";

fn string_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    key: &str,
    fallback: &'a str,
) -> Option<&'a str> {
    match object.get(key) {
        None => Some(fallback),
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => None,
    }
}

/// Extract the gateway's message log from a response.
///
/// Returns an empty list when `response` is absent or has no `metadata`.
/// A missing state key or `messages` field decodes as empty.
pub fn extract_messages(response: Option<&Value>) -> Result<Vec<Value>, StateError> {
    let Some(metadata) = response.and_then(|r| r.get("metadata")) else {
        return Ok(Vec::new());
    };

    let metadata = metadata.as_object().ok_or_else(|| {
        StateError::InvalidMetadata(format!("expected an object, got {metadata}"))
    })?;

    let state_str = string_field(metadata, ARCH_STATE_HEADER, "{}").ok_or_else(|| {
        StateError::InvalidMetadata(format!("{ARCH_STATE_HEADER} must be a JSON-encoded string"))
    })?;

    let state: Value = serde_json::from_str(state_str)
        .map_err(|e| StateError::Decode(format!("{ARCH_STATE_HEADER}: {e}")))?;
    let state = state
        .as_object()
        .ok_or_else(|| StateError::Decode(format!("{ARCH_STATE_HEADER} is not a JSON object")))?;

    let messages_str = string_field(state, "messages", "[]")
        .ok_or_else(|| StateError::Decode("messages must be a JSON-encoded string".into()))?;

    let messages: Vec<Value> = serde_json::from_str(messages_str)
        .map_err(|e| StateError::Decode(format!("messages: {e}")))?;

    tracing::debug!(count = messages.len(), "extracted arch state messages");
    Ok(messages)
}

/// Like [`extract_messages`], but typed as history entries so they can be
/// appended to a caller's history. Extra message fields are dropped.
pub fn extract_history(response: Option<&Value>) -> Result<Vec<HistoryEntry>, StateError> {
    extract_messages(response)?
        .into_iter()
        .map(|message| {
            serde_json::from_value(message)
                .map_err(|e| StateError::Decode(format!("message: {e}")))
        })
        .collect()
}
