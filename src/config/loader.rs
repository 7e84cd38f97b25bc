//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::FormConfig;
use crate::error::{FormError, Result};

/// Candidate config locations, in lookup order.
pub fn candidate_paths(project_root: &Path) -> [PathBuf; 2] {
    [
        project_root.join("stepform.yml"),
        project_root.join(".stepform").join("config.yml"),
    ]
}

/// Find the first existing config file under `project_root`.
pub fn discover(project_root: &Path) -> Option<PathBuf> {
    candidate_paths(project_root)
        .into_iter()
        .find(|path| path.is_file())
}

/// Load configuration.
///
/// An `explicit` path must exist. Otherwise the discovered file is used,
/// falling back to defaults when there is none.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<FormConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover(project_root) {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(FormConfig::default());
            }
        },
    };
    load_config_file(&path)
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<FormConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FormError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FormError::Io(e)
        }
    })?;

    debug!(path = %path.display(), "loading config");
    parse_config(&content, path)
}

/// Parse configuration YAML. `source_path` is used in error messages.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FormConfig> {
    if content.trim().is_empty() {
        return Ok(FormConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| FormError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
