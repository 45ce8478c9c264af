//! Configuration loaders
//!
//! Two independent paths produce the same [`ConfigDocument`]:
//! 1. [`FileConfigLoader`] reads an explicit JSON file. Omitted fields take
//!    their zero value.
//! 2. [`DiscoveredConfigLoader`] searches for `config.yaml` (or `config.yml`)
//!    and layers the file over an explicit [`Defaults`] table.
//!
//! Neither loader keeps state between calls or touches process-wide state.
//! A YAML key left empty (`logModel:`) counts as omitted.

use crate::config::types::ConfigDocument;
use crate::error::ConfigError;
use crate::util::{display_paths, expand_path};
use config::{Config, File, FileFormat, Map, Source, Value, ValueKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Base name searched for by discovery
pub const DEFAULT_BASE_NAME: &str = "config";

/// Extensions tried for each search directory (in order)
const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Sentinel registered for an omitted `logModel`. Outside {0, 1}, so
/// consumers read it as "unspecified".
pub const LOG_MODEL_UNSET: i64 = 5;

const API_KEY_PATH: &str = "setting.aiSetting.apiKey";
const API_KEY_ALIAS_PATH: &str = "setting.aiSetting.API_KEY";
const API_KEY_ALIAS_POINTER: &str = "/setting/aiSetting/API_KEY";

/// Explicit table of default values keyed by dotted path
/// (e.g. `setting.basicSetting.logModel`).
///
/// A default only fills a key the source omits entirely. Explicit zeros and
/// empty strings in the source win.
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    entries: Vec<(String, Value)>,
}

impl Defaults {
    /// Empty table (no defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults applied by [`DiscoveredConfigLoader`].
    pub fn discovery() -> Self {
        Self::new()
            .with("setting.basicSetting.logModel", LOG_MODEL_UNSET)
            .with("setting.basicSetting.completionTone", 1_i64)
            .with("setting.basicSetting.logLevel", "INFO")
    }

    /// Add (or replace) the default for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Whether a default is registered for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Source with every `null` table entry removed, so defaults still apply.
#[derive(Debug, Clone)]
struct WithoutNulls(Map<String, Value>);

impl Source for WithoutNulls {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        Ok(self.0.clone())
    }
}

fn strip_nulls(table: Map<String, Value>) -> Map<String, Value> {
    table
        .into_iter()
        .filter(|(_, value)| !matches!(value.kind, ValueKind::Nil))
        .map(|(key, value)| (key, strip_nested_nulls(value)))
        .collect()
}

fn strip_nested_nulls(mut value: Value) -> Value {
    value.kind = match value.kind {
        ValueKind::Table(table) => ValueKind::Table(strip_nulls(table)),
        ValueKind::Array(items) => {
            ValueKind::Array(items.into_iter().map(strip_nested_nulls).collect())
        }
        other => other,
    };
    value
}

/// Layer `raw` over `defaults` and deserialize the result.
///
/// Pure: the defaults live only in the builder created here.
pub fn merge_defaults<S>(raw: S, defaults: &Defaults) -> Result<ConfigDocument, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let table = raw.collect().map_err(|e| ConfigError::Schema {
        message: e.to_string(),
    })?;
    debug!(defaults = defaults.len(), "Merging configuration over defaults");

    let mut builder = Config::builder();
    for (key, value) in &defaults.entries {
        builder = builder
            .set_default(key.as_str(), value.clone())
            .map_err(|e| ConfigError::Schema {
                message: format!("invalid default for {}: {}", key, e),
            })?;
    }

    let merged = builder
        .add_source(WithoutNulls(strip_nulls(table)))
        .build()
        .map_err(|e| ConfigError::Schema {
            message: e.to_string(),
        })?;

    merged
        .try_deserialize()
        .map_err(|e| ConfigError::Schema {
            message: e.to_string(),
        })
}

/// Loads an explicit JSON configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and deserialize the JSON file at `path`. A leading `~` is expanded.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
        let path = expand_path(path);
        debug!(path = %path.display(), "Reading JSON configuration");

        let content = std::fs::read(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let document = self.parse(&path, &content)?;
        info!(
            path = %path.display(),
            users = document.users.len(),
            "Loaded JSON configuration"
        );
        Ok(document)
    }

    /// Deserialize a JSON document held in memory (useful for testing)
    pub fn load_from_str(&self, json: &str) -> Result<ConfigDocument, ConfigError> {
        self.parse(Path::new("<string>"), json.as_bytes())
    }

    fn parse(&self, path: &Path, content: &[u8]) -> Result<ConfigDocument, ConfigError> {
        let document: ConfigDocument =
            serde_json::from_slice(content).map_err(|e| ConfigError::from_json(path, e))?;

        if has_ignored_api_key_alias(content) {
            warn!(
                path = %path.display(),
                "aiSetting.API_KEY is only read from YAML configuration, use aiSetting.apiKey in JSON"
            );
        }
        Ok(document)
    }
}

/// True when a JSON document sets `setting.aiSetting.API_KEY`.
pub fn has_ignored_api_key_alias(content: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(content)
        .map(|value| {
            value
                .pointer(API_KEY_ALIAS_POINTER)
                .is_some_and(|key| !key.is_null())
        })
        .unwrap_or(false)
}

/// Searches conventional locations for a YAML configuration file.
#[derive(Debug, Clone)]
pub struct DiscoveredConfigLoader {
    base_name: String,
    search_dirs: Vec<PathBuf>,
    defaults: Defaults,
}

impl Default for DiscoveredConfigLoader {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            search_dirs: vec![PathBuf::from(".")],
            defaults: Defaults::discovery(),
        }
    }
}

impl DiscoveredConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search directories. Directories are tried in order.
    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.search_dirs = dirs.into_iter().map(expand_path).collect();
        self
    }

    /// Replace the file base name (default `config`).
    pub fn with_base_name(mut self, name: impl Into<String>) -> Self {
        self.base_name = name.into();
        self
    }

    /// Replace the defaults table.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Find the first candidate file across the search directories.
    pub fn locate(&self) -> Result<PathBuf, ConfigError> {
        for dir in self.search_dirs() {
            for ext in YAML_EXTENSIONS {
                let candidate = dir.join(format!("{}.{}", self.base_name, ext));
                debug!(path = %candidate.display(), "Checking for configuration file");
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        Err(ConfigError::NotFound {
            base_name: self.base_name.clone(),
            searched: display_paths(self.search_dirs()),
        })
    }

    /// Discover, parse and deserialize the configuration.
    ///
    /// `hint` is accepted for parity with [`FileConfigLoader::load`]; the
    /// search only uses the configured base name and directories.
    pub fn load(&self, hint: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
        debug!(hint = %hint.as_ref().display(), "Ignoring hint path, searching for configuration");

        let path = self.locate()?;
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let document = self.parse(&path, &content)?;
        info!(
            path = %path.display(),
            users = document.users.len(),
            "Loaded YAML configuration"
        );
        Ok(document)
    }

    /// Parse a YAML document held in memory (useful for testing)
    pub fn load_from_str(&self, yaml: &str) -> Result<ConfigDocument, ConfigError> {
        self.parse(Path::new("<string>"), yaml)
    }

    fn parse(&self, path: &Path, yaml: &str) -> Result<ConfigDocument, ConfigError> {
        let raw = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let raw = resolve_api_key_alias(raw).map_err(|e| e.in_file(path))?;
        merge_defaults(raw, &self.defaults).map_err(|e| e.in_file(path))
    }
}

/// Copy `API_KEY` into `apiKey` when `apiKey` is missing or empty.
fn resolve_api_key_alias(raw: Config) -> Result<Config, ConfigError> {
    if raw
        .get_string(API_KEY_PATH)
        .is_ok_and(|key| !key.is_empty())
    {
        return Ok(raw);
    }

    let key = match raw.get_string(API_KEY_ALIAS_PATH) {
        Ok(key) if !key.is_empty() => key,
        _ => return Ok(raw),
    };

    Config::builder()
        .add_source(raw)
        .set_override(API_KEY_PATH, key)
        .and_then(|builder| builder.build())
        .map_err(|e| ConfigError::Schema {
            message: e.to_string(),
        })
}

/// Load an explicit JSON configuration file.
pub fn load_json_config(path: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
    FileConfigLoader::new().load(path)
}

/// Discover `config.yaml` in the working directory and load it.
pub fn discover_config(hint: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
    DiscoveredConfigLoader::new().load(hint)
}
