//! Centralized path management for ideahub.

use std::path::PathBuf;

/// Returns the root directory for ideahub local data.
/// Checks `IDEAHUB_ROOT` env var first, falls back to `.ideahub`.
pub fn ideahub_root() -> PathBuf {
    if let Ok(root) = std::env::var("IDEAHUB_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".ideahub")
    }
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    ideahub_root().join("config.yaml")
}
