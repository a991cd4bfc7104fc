//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use archui_ai::{
    accumulate_sse, decode_chunk, extract_history, extract_messages, process_chunk, History,
    HistoryEntry, Role,
};
use archui_common::{ArchError, Result, StateError, StreamError};
use archui_config::{build_catalog, load_catalog, ToolCatalog};
use tracing::{debug, info};

use crate::cli::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Tools { openai } => tools(args.config.as_deref(), openai),
        Command::Replay {
            input,
            prompt,
            jsonl,
            history,
        } => replay(&input, prompt, jsonl, history),
        Command::ArchState { input, history } => arch_state(&input, history),
    }
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(input)?;
    Ok(Box::new(BufReader::new(file)))
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ArchError::Other(format!("failed to serialize output: {e}")))
}

/// `--config` wins; otherwise the catalog comes from `$ARCH_CONFIG` or the default file.
fn select_catalog(config: Option<&Path>) -> Option<ToolCatalog> {
    match config {
        Some(path) => {
            debug!(path = %path.display(), "building tool catalog");
            build_catalog(path)
        }
        None => load_catalog(),
    }
}

fn tools(config: Option<&Path>, openai: bool) -> Result<()> {
    let Some(catalog) = select_catalog(config) else {
        eprintln!("no tools available");
        return Ok(());
    };

    let json = if openai {
        to_pretty_json(&catalog.to_openai_tools())?
    } else {
        to_pretty_json(&catalog)?
    };
    println!("{json}");
    Ok(())
}

/// Accumulate a stream with one chunk JSON per line. Blank lines are skipped.
fn accumulate_jsonl<R: BufRead>(
    reader: R,
    history: &mut History,
    mut on_delta: impl FnMut(&str),
) -> std::result::Result<usize, StreamError> {
    let mut processed = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| StreamError::Read(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(chunk) = decode_chunk(&line)? else {
            break;
        };
        if let Some(fragment) = process_chunk(&chunk, history)? {
            on_delta(&fragment);
        }
        processed += 1;
    }
    Ok(processed)
}

fn replay(input: &str, prompt: String, jsonl: bool, show_history: bool) -> Result<()> {
    let reader = open_input(input)?;
    let mut history: History = vec![HistoryEntry::with_content(Role::User, prompt)];

    let mut stdout = io::stdout();
    let mut write_error = None;
    let on_delta = |fragment: &str| {
        if write_error.is_none() {
            if let Err(e) = stdout.write_all(fragment.as_bytes()).and_then(|_| stdout.flush()) {
                write_error = Some(e);
            }
        }
    };

    let processed = if jsonl {
        accumulate_jsonl(reader, &mut history, on_delta)?
    } else {
        accumulate_sse(reader, &mut history, on_delta)?
    };
    if let Some(e) = write_error {
        return Err(e.into());
    }
    println!();

    info!(chunks = processed, entries = history.len(), "replay finished");

    if show_history {
        println!("{}", to_pretty_json(&history)?);
    }
    Ok(())
}

fn arch_state(input: &str, as_history: bool) -> Result<()> {
    let mut content = String::new();
    open_input(input)?.read_to_string(&mut content)?;

    let response: Option<serde_json::Value> = if content.trim().is_empty() {
        None
    } else {
        let value = serde_json::from_str(&content)
            .map_err(|e| StateError::Decode(format!("response: {e}")))?;
        Some(value)
    };

    let json = if as_history {
        to_pretty_json(&extract_history(response.as_ref())?)?
    } else {
        to_pretty_json(&extract_messages(response.as_ref())?)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_stream_accumulates_until_done() {
        let input = concat!(
            "{\"model\":\"gpt-4o\",\"choices\":[{\"delta\":{\"role\":\"assistant\",\"content\":\"Hello\"}}]}\n",
            "\n",
            "{\"model\":\"gpt-4o\",\"choices\":[{\"delta\":{\"content\":\", world\"}}]}\n",
            "[DONE]\n",
            "{\"model\":\"gpt-4o\",\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n",
        );
        let mut history: History = vec![HistoryEntry::with_content(Role::User, "greet me")];
        let mut visible = String::new();

        let processed =
            accumulate_jsonl(input.as_bytes(), &mut history, |d| visible.push_str(d)).unwrap();

        assert_eq!(processed, 2);
        assert_eq!(visible, "Hello, world");
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content.as_deref(), Some("Hello, world"));
    }

    #[test]
    fn jsonl_decode_errors_propagate() {
        let mut history: History = vec![HistoryEntry::new(Role::User)];
        let err = accumulate_jsonl("not json\n".as_bytes(), &mut history, |_| {}).unwrap_err();
        assert!(matches!(err, StreamError::Decode(_)));
    }

    #[test]
    fn explicit_config_path_selects_that_file() {
        let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/arch_config.yaml");
        let catalog = select_catalog(Some(&demo)).unwrap();
        assert!(catalog.contains("get_current_weather"));

        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no_such_config.yaml");
        assert!(select_catalog(Some(&missing)).is_none());
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let err = open_input("/nonexistent/archui/stream.sse").err().unwrap();
        assert!(matches!(err, ArchError::Io(_)));
    }
}
