//! Config path resolution.

use std::path::PathBuf;

/// Environment variable that overrides the config file location.
pub const ARCH_CONFIG_ENV: &str = "ARCH_CONFIG";

/// Config file used when `ARCH_CONFIG` is unset, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "arch_config.yaml";

/// Resolve the config path from an optional override value.
///
/// Empty overrides are treated as unset.
pub fn resolve_config_path(override_value: Option<String>) -> PathBuf {
    match override_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Get the config path from `ARCH_CONFIG`, falling back to `arch_config.yaml`.
pub fn config_path_from_env() -> PathBuf {
    resolve_config_path(std::env::var(ARCH_CONFIG_ENV).ok())
}
