//! Configuration module
//!
//! Handles loading the settings tree from an explicit JSON file or a
//! discovered YAML file.

pub mod loader;
pub mod types;

pub use loader::{
    DEFAULT_BASE_NAME, Defaults, DiscoveredConfigLoader, FileConfigLoader, LOG_MODEL_UNSET,
    discover_config, load_json_config, merge_defaults,
};
pub use types::*;
