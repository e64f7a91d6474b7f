// src/triage/mod.rs

//! Turns a finished run's captured output into notifications and a
//! success/failure outcome.
//!
//! - [`scan`] extracts diagnostic lines from raw text.
//! - [`Triager`] emits notifications for them and decides whether the run
//!   failed.

pub mod scan;

use tracing::{error, info};

use crate::config::TriageSection;
use crate::errors::{Result, WorkflowError};
use crate::notify::{Notification, Notifier};
use crate::types::CapturedOutput;

pub use scan::{DiagnosticPatterns, Diagnostics, ProgressReport, scan};

#[derive(Debug, Clone)]
pub struct Triager {
    patterns: DiagnosticPatterns,
    error_title: String,
}

impl Triager {
    pub fn new(patterns: DiagnosticPatterns, error_title: impl Into<String>) -> Self {
        Self {
            patterns,
            error_title: error_title.into(),
        }
    }

    pub fn from_config(triage: &TriageSection) -> Result<Self> {
        Ok(Self::new(
            DiagnosticPatterns::from_config(triage)?,
            triage.error_title.clone(),
        ))
    }

    /// Triage one run.
    ///
    /// 1. One info notification per step/accuracy pair.
    /// 2. Nonzero exit: one error notification per exception line, then
    ///    `Err(ToolFailed)`, even when no exception line was found.
    /// 3. Zero exit: `Ok` with the scanned diagnostics.
    ///
    /// Holds no state between calls.
    pub fn triage(
        &self,
        captured: &CapturedOutput,
        notifier: &dyn Notifier,
    ) -> Result<Diagnostics> {
        let diagnostics = scan(&captured.text, &self.patterns);

        for report in &diagnostics.progress {
            notifier.notify(&Notification::info(&report.step, &report.accuracy))?;
        }

        if !captured.success() {
            for line in &diagnostics.exceptions {
                notifier.notify(&Notification::error(&self.error_title, line))?;
            }
            error!(
                exit_code = captured.exit_code,
                exceptions = diagnostics.exceptions.len(),
                "tool reported failure"
            );
            return Err(WorkflowError::ToolFailed);
        }

        info!(
            progress = diagnostics.progress.len(),
            "tool finished successfully"
        );
        Ok(diagnostics)
    }
}
