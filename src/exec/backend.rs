// src/exec/backend.rs

//! Pluggable runner backend abstraction.
//!
//! The workflow talks to a `RunnerBackend` instead of spawning processes
//! directly. Production code uses [`ProcessRunner`]; tests can provide a
//! backend that returns canned output and drops result files into the output
//! directory without running anything.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::CapturedOutput;

use super::command::ToolCommand;
use super::runner::ProcessRunner;

/// How the tool's output is handled during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Merge stdout/stderr, echo and accumulate every line.
    Capture,
    /// Inherit stdio; nothing is captured.
    Inherit,
}

/// Trait abstracting how the external tool is executed.
pub trait RunnerBackend: Send + Sync {
    fn run<'a>(
        &'a self,
        command: &'a ToolCommand,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>>;
}

impl RunnerBackend for ProcessRunner {
    fn run<'a>(
        &'a self,
        command: &'a ToolCommand,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>> {
        Box::pin(async move {
            match mode {
                OutputMode::Capture => self.run_captured(command).await,
                OutputMode::Inherit => self.run_inherited(command).await,
            }
        })
    }
}
