use std::path::Path;

use anyhow::{Context, Result};

use atrium_core::config::ConfigRoot;

/// Loads the configuration file, falling back to built-in defaults when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<ConfigRoot> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Ok(ConfigRoot::from_toml_str(&raw)?)
        }
        None => Ok(ConfigRoot::default()),
    }
}
