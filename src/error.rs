//! Error types for course-pilot
//!
//! Every loader returns a [`ConfigError`] instead of terminating the process.
//! Deciding to exit is left to the binary.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: no {base_name}.yaml or {base_name}.yml in {searched}")]
    NotFound { base_name: String, searched: String },

    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("configuration read/parse failed, check the file contents: {message}")]
    Schema { message: String },
}

impl ConfigError {
    /// Classify a `serde_json` failure for the given file.
    pub fn from_json(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let path = path.into();
        match err.classify() {
            Category::Io => ConfigError::Io {
                path,
                source: err.into(),
            },
            Category::Syntax | Category::Eof => ConfigError::Parse {
                path,
                message: err.to_string(),
            },
            Category::Data => ConfigError::Schema {
                message: format!("{}: {}", path.display(), err),
            },
        }
    }

    /// Name the offending file in a schema error. Other variants already do.
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            ConfigError::Schema { message } => ConfigError::Schema {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        }
    }

    /// True for the "file not found" path of discovery.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_syntax_is_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{\"setting\": ").unwrap_err();
        let err = ConfigError::from_json("config.json", err);
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_from_json_type_mismatch_is_schema() {
        let err = serde_json::from_str::<Vec<String>>("{\"a\": 1}").unwrap_err();
        let err = ConfigError::from_json("/etc/course-pilot/config.json", err);
        assert!(matches!(err, ConfigError::Schema { .. }));
        assert!(err.to_string().contains("/etc/course-pilot/config.json"));
    }

    #[test]
    fn test_in_file_only_touches_schema() {
        let err = ConfigError::Schema {
            message: "invalid type".into(),
        }
        .in_file(Path::new("config.yaml"));
        assert_eq!(
            err.to_string(),
            "configuration read/parse failed, check the file contents: config.yaml: invalid type"
        );

        let err = ConfigError::Parse {
            path: "config.yaml".into(),
            message: "bad indent".into(),
        }
        .in_file(Path::new("other.yaml"));
        assert!(!err.to_string().contains("other.yaml"));
    }

    #[test]
    fn test_not_found_message() {
        let err = ConfigError::NotFound {
            base_name: "config".into(),
            searched: "./".into(),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("configuration file not found"));
    }
}
