//! Tool catalog built from the config's prompt targets.

mod builder;
mod types;


pub use builder::{
    build_catalog, catalog_from_config, convert_prompt_target, load_arch_config,
    try_build_catalog,
};
pub use types::{ParametersSchema, PropertySchema, ToolCatalog, ToolInfo};
