//! Chat stream handling for the Arch chat UI.
//!
//! Provides:
//! - Chunk decoding for OpenAI-style `chat.completion.chunk` streams
//! - A synchronous SSE reader for recorded or piped streams
//! - History accumulation with role transitions and tool calls
//! - Extraction of the gateway's `x-arch-state` message log

pub mod accumulator;
pub mod arch_state;
pub mod chunk;
pub mod history;
pub mod streaming;

pub use accumulator::{accumulate_sse, process_chunk};
pub use arch_state::{extract_history, extract_messages, ARCH_STATE_HEADER};
pub use chunk::{decode_chunk, ChatCompletionChunk, ChunkChoice, Delta, FunctionCall, ToolCall};
pub use history::{assistant_text, History, HistoryEntry, Role};
pub use streaming::{SseEvent, SseReader};
