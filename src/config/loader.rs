// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, WorkflowError};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that the program is set, the triage patterns compile, the result
///   glob is a valid file-name glob, and parameter declarations name real
///   inputs.
/// - Resolves relative launch-plan paths against the file's directory.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut raw_config = load_from_path(path)?;
    if let Some(base) = path.parent() {
        raw_config.launch_plan = std::mem::take(&mut raw_config.launch_plan)
            .into_iter()
            .map(|(name, plan)| (name, plan.relative_to(base)))
            .collect();
    }
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the config the way the binary does.
///
/// - An explicit path must exist.
/// - Otherwise [`default_config_path`] is used when present.
/// - Otherwise the built-in defaults apply.
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(WorkflowError::ConfigError(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        return load_and_validate(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        debug!(path = %default_path.display(), "loading default config file");
        load_and_validate(&default_path)
    } else {
        debug!("no config file found; using built-in defaults");
        Ok(ConfigFile::default())
    }
}

/// `Sourcepredict.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Sourcepredict.toml")
}
