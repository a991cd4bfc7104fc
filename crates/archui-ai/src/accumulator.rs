//! Folding streamed chunks into a conversation history.
//!
//! The history is owned by the caller and must be seeded with at least one
//! entry (normally the user's message) before the first chunk arrives.
//! Each chunk either extends the last entry or, when the delta switches
//! role (assistant, then a tool call, then the tool response), opens a new
//! one.

use std::io::BufRead;

use archui_common::StreamError;
use tracing::debug;

use crate::chunk::{decode_chunk, ChatCompletionChunk};
use crate::history::{History, HistoryEntry};
use crate::streaming::SseReader;

/// Fold one chunk into `history`.
///
/// Returns the content fragment when the turn it landed in belongs to the
/// assistant, so callers can stream only user-visible text while tool-role
/// content is still recorded.
pub fn process_chunk(
    chunk: &ChatCompletionChunk,
    history: &mut History,
) -> Result<Option<String>, StreamError> {
    let delta = chunk.delta().ok_or(StreamError::NoChoices)?;
    let last_role = history
        .last()
        .map(|entry| &entry.role)
        .ok_or(StreamError::EmptyHistory)?;

    if let Some(role) = delta.role.as_ref() {
        if role != last_role {
            debug!(from = %last_role, to = %role, "role changed, starting new history entry");
            history.push(HistoryEntry::new(role.clone()));
        }
    }

    let entry = history.last_mut().ok_or(StreamError::EmptyHistory)?;
    entry.model = Some(chunk.model.clone());

    // Tool calls replace, never merge.
    if let Some(tool_calls) = delta.tool_calls.as_ref().filter(|calls| !calls.is_empty()) {
        entry.tool_calls = Some(tool_calls.clone());
    }

    let Some(fragment) = delta.content.as_deref() else {
        return Ok(None);
    };
    entry
        .content
        .get_or_insert_with(String::new)
        .push_str(fragment);

    if entry.role.is_assistant() {
        Ok(Some(fragment.to_string()))
    } else {
        Ok(None)
    }
}

/// Replay an SSE stream of chunks into `history`, handing every assistant
/// fragment to `on_delta`. Stops at `[DONE]` or end of input and returns the
/// number of chunks processed.
pub fn accumulate_sse<R: BufRead>(
    reader: R,
    history: &mut History,
    mut on_delta: impl FnMut(&str),
) -> Result<usize, StreamError> {
    let mut processed = 0;
    for event in SseReader::new(reader) {
        let event = event?;
        let Some(chunk) = decode_chunk(&event.data)? else {
            break;
        };
        if let Some(fragment) = process_chunk(&chunk, history)? {
            on_delta(&fragment);
        }
        processed += 1;
    }
    debug!(chunks = processed, entries = history.len(), "stream accumulated");
    Ok(processed)
}
