//! Prompt-target to tool-schema conversion and catalog loading.

use std::path::Path;

use archui_common::ConfigError;
use tracing::{debug, info, warn};

use super::types::{ParametersSchema, PropertySchema, ToolCatalog, ToolInfo};
use crate::prompt_targets::{ArchConfig, ParamSpec, PromptTarget};

/// Load and parse the gateway config at `path`.
pub fn load_arch_config(path: &Path) -> Result<ArchConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ArchConfig = serde_yaml::from_str(&content).map_err(|e| {
        let msg = e.to_string();
        if msg.contains("missing field") {
            ConfigError::MissingField(format!("{}: {msg}", path.display()))
        } else {
            ConfigError::ParseError(format!("failed to parse YAML {}: {msg}", path.display()))
        }
    })?;

    info!(
        targets = config.prompt_targets.len(),
        "loaded prompt targets from {}",
        path.display()
    );
    Ok(config)
}

fn require<'a>(
    value: &'a Option<String>,
    field: &str,
    owner: &str,
) -> Result<&'a str, ConfigError> {
    value
        .as_deref()
        .ok_or_else(|| ConfigError::MissingField(format!("{owner}: {field}")))
}

fn convert_parameter(
    param: &ParamSpec,
    target: &str,
) -> Result<(String, PropertySchema), ConfigError> {
    let owner = format!("prompt target '{target}' parameter");
    let kind = require(&param.kind, "type", &owner)?;
    let description = require(&param.description, "description", &owner)?;
    let name = require(&param.name, "name", &owner)?;

    let property = PropertySchema {
        kind: kind.to_string(),
        description: description.to_string(),
        default: param.default.clone(),
        format: param.format.clone(),
        enum_values: param.enum_values.clone(),
        items: param.items.clone(),
        minimum: param.minimum.clone(),
        maximum: param.maximum.clone(),
    };
    Ok((name.to_string(), property))
}

/// Convert one prompt target into its tool name and description.
pub fn convert_prompt_target(target: &PromptTarget) -> Result<(String, ToolInfo), ConfigError> {
    let label = target.name.as_deref().unwrap_or("<unnamed>");
    let owner = format!("prompt target '{label}'");
    let description = require(&target.description, "description", &owner)?;

    let mut parameters = ParametersSchema::default();
    for param in target.parameters.iter().flatten() {
        let (name, property) = convert_parameter(param, label)?;
        if param.is_required() {
            parameters.required.push(name.clone());
        }
        parameters.properties.insert(name, property);
    }

    let name = require(&target.name, "name", "prompt target")?;
    let info = ToolInfo {
        description: description.to_string(),
        parameters,
    };
    Ok((name.to_string(), info))
}

/// Build a catalog from already-parsed config, skipping default targets.
pub fn catalog_from_config(config: &ArchConfig) -> Result<ToolCatalog, ConfigError> {
    let mut catalog = ToolCatalog::new();
    for target in &config.prompt_targets {
        if target.is_default() {
            debug!(name = ?target.name, "skipping default prompt target");
            continue;
        }
        let (name, info) = convert_prompt_target(target)?;
        catalog.insert(name, info);
    }
    Ok(catalog)
}

/// Load the config at `path` and build its tool catalog, reporting why it failed.
pub fn try_build_catalog(path: &Path) -> Result<ToolCatalog, ConfigError> {
    let config = load_arch_config(path)?;
    catalog_from_config(&config)
}

/// Load the config at `path` and build its tool catalog.
///
/// Any failure is logged and yields `None`; callers treat that as
/// "no tools available". A partial catalog is never returned.
pub fn build_catalog(path: &Path) -> Option<ToolCatalog> {
    match try_build_catalog(path) {
        Ok(catalog) => {
            info!(tools = catalog.len(), "built tool catalog");
            Some(catalog)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to build tool catalog");
            None
        }
    }
}
