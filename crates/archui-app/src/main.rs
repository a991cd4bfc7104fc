//! archui: command-line front end for the Arch chat UI helpers.
//!
//! Prints the tool catalog derived from the gateway config, replays
//! recorded chat-completion streams into a conversation history, and
//! unwraps the gateway state embedded in response metadata.

mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "archui=info";

fn init_logging(log_level: Option<&str>) {
    let directive = log_level
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());

    let filter = match directive {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!("archui v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
