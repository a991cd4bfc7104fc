use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chat-stream and tool-catalog utilities for the Arch gateway UI.
#[derive(Parser, Debug)]
#[command(name = "archui", version, about)]
pub struct Args {
    /// Gateway config path override (defaults to $ARCH_CONFIG, then arch_config.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tool catalog built from the config's prompt targets.
    Tools {
        /// Emit the chat-completion `tools` array instead of the name mapping.
        #[arg(long)]
        openai: bool,
    },

    /// Replay a recorded chunk stream into a conversation history.
    Replay {
        /// Stream file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// User message that seeds the history.
        #[arg(long, default_value = "")]
        prompt: String,

        /// Input is one chunk JSON per line instead of SSE.
        #[arg(long)]
        jsonl: bool,

        /// Print the final history as JSON after the streamed text.
        #[arg(long)]
        history: bool,
    },

    /// Print the gateway messages embedded in a response's metadata.
    ArchState {
        /// Response JSON file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Decode messages as history entries.
        #[arg(long)]
        history: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_accepts_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "archui",
            "tools",
            "--openai",
            "--config",
            "/etc/arch/config.yaml",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/arch/config.yaml")));
        assert!(matches!(args.command, Command::Tools { openai: true }));
    }

    #[test]
    fn replay_defaults_to_stdin_sse() {
        let args = Args::try_parse_from(["archui", "replay"]).unwrap();
        match args.command {
            Command::Replay {
                input,
                prompt,
                jsonl,
                history,
            } => {
                assert_eq!(input, "-");
                assert_eq!(prompt, "");
                assert!(!jsonl);
                assert!(!history);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn arch_state_takes_a_file() {
        let args =
            Args::try_parse_from(["archui", "--log-level", "debug", "arch-state", "resp.json"])
                .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            args.command,
            Command::ArchState { ref input, history: false } if input == "resp.json"
        ));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["archui"]).is_err());
    }
}
