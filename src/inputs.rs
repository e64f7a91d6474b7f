// src/inputs.rs

//! The workflow's four declared inputs and their resolution into local paths.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{Result, WorkflowError};
use crate::fs::FileSystem;

/// Inputs with every value possibly missing: what the command line or a
/// launch plan supplies.
///
/// Unknown keys are rejected on deserialization so a misspelled input name
/// in a launch plan fails at load time.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialInputs {
    #[serde(default)]
    pub sources_csv: Option<PathBuf>,
    #[serde(default)]
    pub labels_csv: Option<PathBuf>,
    #[serde(default)]
    pub sink_count_file: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl PartialInputs {
    /// Fill the gaps in `self` from `base`. Values already set in `self` win.
    pub fn or(self, base: &PartialInputs) -> PartialInputs {
        PartialInputs {
            sources_csv: self.sources_csv.or_else(|| base.sources_csv.clone()),
            labels_csv: self.labels_csv.or_else(|| base.labels_csv.clone()),
            sink_count_file: self
                .sink_count_file
                .or_else(|| base.sink_count_file.clone()),
            output_dir: self.output_dir.or_else(|| base.output_dir.clone()),
        }
    }

    /// Resolve relative paths against `base`. Absolute paths are kept.
    pub fn relative_to(self, base: &Path) -> PartialInputs {
        let rebase = |path: Option<PathBuf>| {
            path.map(|p| if p.is_absolute() { p } else { base.join(p) })
        };
        PartialInputs {
            sources_csv: rebase(self.sources_csv),
            labels_csv: rebase(self.labels_csv),
            sink_count_file: rebase(self.sink_count_file),
            output_dir: rebase(self.output_dir),
        }
    }

    /// Require all four inputs. The error lists every missing one.
    pub fn complete(self) -> Result<WorkflowInputs> {
        let missing: Vec<&str> = [
            ("sources_csv", self.sources_csv.is_none()),
            ("labels_csv", self.labels_csv.is_none()),
            ("sink_count_file", self.sink_count_file.is_none()),
            ("output_dir", self.output_dir.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        match (
            self.sources_csv,
            self.labels_csv,
            self.sink_count_file,
            self.output_dir,
        ) {
            (Some(sources_csv), Some(labels_csv), Some(sink_count_file), Some(output_dir)) => {
                Ok(WorkflowInputs {
                    sources_csv,
                    labels_csv,
                    sink_count_file,
                    output_dir,
                })
            }
            _ => Err(WorkflowError::InvalidInput(format!(
                "missing required input(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Fully specified inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowInputs {
    pub sources_csv: PathBuf,
    pub labels_csv: PathBuf,
    pub sink_count_file: PathBuf,
    pub output_dir: PathBuf,
}

impl WorkflowInputs {
    /// Check the input files exist, create the output directory if needed,
    /// and make every path absolute.
    ///
    /// The tool runs with `output_dir` as its working directory, so relative
    /// input paths would otherwise resolve against the wrong place.
    pub fn prepare(self, fs: &dyn FileSystem) -> Result<WorkflowInputs> {
        let sources_csv = existing_file(fs, "sources_csv", &self.sources_csv)?;
        let labels_csv = existing_file(fs, "labels_csv", &self.labels_csv)?;
        let sink_count_file = existing_file(fs, "sink_count_file", &self.sink_count_file)?;

        if fs.exists(&self.output_dir) && !fs.is_dir(&self.output_dir) {
            return Err(WorkflowError::InvalidInput(format!(
                "output_dir: {} exists and is not a directory",
                self.output_dir.display()
            )));
        }
        if !fs.exists(&self.output_dir) {
            debug!(output_dir = %self.output_dir.display(), "creating output directory");
            fs.create_dir_all(&self.output_dir)?;
        }
        let output_dir = fs.canonicalize(&self.output_dir)?;

        Ok(WorkflowInputs {
            sources_csv,
            labels_csv,
            sink_count_file,
            output_dir,
        })
    }
}

fn existing_file(fs: &dyn FileSystem, name: &str, path: &Path) -> Result<PathBuf> {
    if !fs.is_file(path) {
        return Err(WorkflowError::InvalidInput(format!(
            "{name}: {} does not exist or is not a file",
            path.display()
        )));
    }
    Ok(fs.canonicalize(path)?)
}
