// src/workflow.rs

//! One end-to-end run: inputs → tool process → triage → result files.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::{OutputMode, ProcessRunner, RunnerBackend, ToolCommand};
use crate::fs::{FileSystem, RealFileSystem};
use crate::inputs::WorkflowInputs;
use crate::notify::{Notifier, TracingNotifier};
use crate::outputs::{ResultPattern, collect_results};
use crate::triage::Triager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// `true`: capture and triage output, fail on nonzero exit.
    /// `false`: fire-and-glob; the exit code is only logged.
    pub capture: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self { capture: true }
    }
}

/// Runs the external tool once per [`Workflow::run`] call.
///
/// Collaborators are injected so tests can swap the process runner, the
/// notification sink and the filesystem.
pub struct Workflow {
    program: String,
    triager: Triager,
    result_pattern: ResultPattern,
    options: WorkflowOptions,
    runner: Box<dyn RunnerBackend>,
    notifier: Box<dyn Notifier>,
    fs: Arc<dyn FileSystem>,
}

impl Workflow {
    /// Build a workflow wired to real processes, tracing notifications and
    /// the real filesystem.
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        Ok(Self {
            program: cfg.tool().program.clone(),
            triager: Triager::from_config(cfg.triage())?,
            result_pattern: ResultPattern::new(&cfg.output().result_glob)?,
            options: WorkflowOptions {
                capture: cfg.tool().capture_output,
            },
            runner: Box::new(ProcessRunner::new()),
            notifier: Box::new(TracingNotifier),
            fs: Arc::new(RealFileSystem),
        })
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_options(mut self, options: WorkflowOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_runner(mut self, runner: Box<dyn RunnerBackend>) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn options(&self) -> WorkflowOptions {
        self.options
    }

    /// The command line a run with these inputs would execute.
    pub fn command_for(&self, inputs: &WorkflowInputs) -> ToolCommand {
        ToolCommand::sourcepredict(&self.program, inputs)
    }

    /// Check the inputs, create `output_dir` and make every path absolute.
    pub fn prepare(&self, inputs: WorkflowInputs) -> Result<WorkflowInputs> {
        inputs.prepare(self.fs.as_ref())
    }

    /// Run the tool and return the result files found in `output_dir`.
    ///
    /// With capture on, a nonzero exit emits error notifications and fails
    /// with `ToolFailed`. With capture off, result files are collected
    /// whatever the exit code.
    pub async fn run(&self, inputs: WorkflowInputs) -> Result<Vec<PathBuf>> {
        let inputs = self.prepare(inputs)?;
        let command = self.command_for(&inputs);

        if self.options.capture {
            let captured = self.runner.run(&command, OutputMode::Capture).await?;
            self.triager.triage(&captured, self.notifier.as_ref())?;
        } else {
            let outcome = self.runner.run(&command, OutputMode::Inherit).await?;
            if !outcome.success() {
                warn!(
                    exit_code = outcome.exit_code,
                    "tool exited nonzero; output capture is off, collecting results anyway"
                );
            }
        }

        let results = collect_results(self.fs.as_ref(), &inputs.output_dir, &self.result_pattern)?;
        info!(results = results.len(), "workflow finished");
        Ok(results)
    }
}
