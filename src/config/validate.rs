// src/config/validate.rs

use globset::Glob;
use regex::Regex;

use crate::config::model::{ConfigFile, INPUT_NAMES, RawConfigFile};
use crate::errors::{Result, WorkflowError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::WorkflowError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tool(cfg)?;
    validate_patterns(cfg)?;
    validate_result_glob(cfg)?;
    validate_parameters(cfg)?;
    Ok(())
}

fn validate_tool(cfg: &RawConfigFile) -> Result<()> {
    if cfg.tool.program.trim().is_empty() {
        return Err(WorkflowError::ConfigError(
            "[tool].program must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_patterns(cfg: &RawConfigFile) -> Result<()> {
    let triage = &cfg.triage;
    for (key, pattern) in [
        ("step_pattern", &triage.step_pattern),
        ("accuracy_pattern", &triage.accuracy_pattern),
        ("exception_pattern", &triage.exception_pattern),
    ] {
        if pattern.is_empty() {
            return Err(WorkflowError::ConfigError(format!(
                "[triage].{key} must not be empty"
            )));
        }
        Regex::new(pattern)?;
    }
    Ok(())
}

fn validate_result_glob(cfg: &RawConfigFile) -> Result<()> {
    let glob = &cfg.output.result_glob;
    if glob.trim().is_empty() {
        return Err(WorkflowError::ConfigError(
            "[output].result_glob must not be empty".to_string(),
        ));
    }
    if glob.contains('/') {
        return Err(WorkflowError::ConfigError(format!(
            "[output].result_glob is matched against file names and cannot contain '/' (got '{glob}')"
        )));
    }
    Glob::new(glob)?;
    Ok(())
}

fn validate_parameters(cfg: &RawConfigFile) -> Result<()> {
    for name in cfg.parameter.keys() {
        if !INPUT_NAMES.contains(&name.as_str()) {
            return Err(WorkflowError::ConfigError(format!(
                "[parameter.{name}] does not name a workflow input (expected one of {INPUT_NAMES:?})"
            )));
        }
    }
    Ok(())
}
