//! Utility functions shared across the application.

mod secret;

pub use secret::SecretString;

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Deserialize `null` as the field's default value.
///
/// Configuration files written by older tooling store empty lists as `null`,
/// and an empty YAML key (`excludeCourses:`) reads as null too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Expand a leading `~` to the home directory.
///
/// Paths without a tilde are returned unchanged.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

/// Render a list of paths for diagnostics, e.g. `./, /etc/course-pilot`.
pub fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
