//! Server-Sent Events (SSE) reader.
//!
//! Chat-completion APIs stream responses as SSE. This module groups the
//! lines of any buffered reader into events so recorded or piped streams
//! can be replayed without a network client.

use std::io::{BufRead, Lines};

use archui_common::StreamError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the stream names one.
    pub event: Option<String>,
    /// The event data (JSON string or `[DONE]`).
    pub data: String,
}

/// Iterator over the SSE events of a buffered reader.
pub struct SseReader<R> {
    lines: Lines<R>,
    finished: bool,
}

impl<R: BufRead> SseReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for SseReader<R> {
    type Item = Result<SseEvent, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut current_event: Option<String> = None;
        let mut current_data = String::new();

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(StreamError::Read(e.to_string())));
                }
                None => {
                    // Flush any remaining event
                    self.finished = true;
                    if current_data.is_empty() {
                        return None;
                    }
                    return Some(Ok(SseEvent {
                        event: current_event,
                        data: current_data,
                    }));
                }
            };

            if line.is_empty() {
                // Empty line = end of event
                if !current_data.is_empty() {
                    return Some(Ok(SseEvent {
                        event: current_event,
                        data: current_data,
                    }));
                }
                current_event = None;
                continue;
            }

            if let Some(event_type) = line.strip_prefix("event:") {
                current_event = Some(event_type.trim_start().to_string());
            } else if let Some(data) = line.strip_prefix("data:") {
                let data = data.strip_prefix(' ').unwrap_or(data);
                if !current_data.is_empty() {
                    current_data.push('\n');
                }
                current_data.push_str(data);
            }
            // Ignore other fields (id:, retry:, comments)
        }
    }
}
