//! Gateway configuration for the chat UI.
//!
//! Reads the `prompt_targets` section of `arch_config.yaml` and turns it
//! into a tool catalog that can be passed straight to a chat-completion
//! request. Loading is fail-soft: a missing or malformed config degrades
//! to "no tools" instead of an error.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use archui_config::load_catalog;
//!
//! match load_catalog() {
//!     Some(catalog) => println!("{} tools", catalog.len()),
//!     None => println!("no tools available"),
//! }
//! ```

pub mod catalog;
pub mod paths;
pub mod prompt_targets;

pub use catalog::{build_catalog, try_build_catalog, ToolCatalog, ToolInfo};
pub use paths::{config_path_from_env, ARCH_CONFIG_ENV, DEFAULT_CONFIG_FILE};
pub use prompt_targets::{ArchConfig, ParamSpec, PromptTarget};

/// Build the tool catalog from `$ARCH_CONFIG` or `arch_config.yaml`.
pub fn load_catalog() -> Option<ToolCatalog> {
    let path = config_path_from_env();
    tracing::debug!(path = %path.display(), "building tool catalog");
    build_catalog(&path)
}
