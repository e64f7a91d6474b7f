// src/triage/scan.rs

//! Line scanner for the tool's captured output.
//!
//! Pure text in, [`Diagnostics`] out. Nothing here touches processes or
//! notifications, so the patterns can be swapped when the tool's log format
//! changes.

use regex::Regex;
use tracing::warn;

use crate::config::TriageSection;
use crate::errors::Result;

/// Compiled line patterns. Each is tried against one line at a time; the
/// matched text becomes the diagnostic line.
#[derive(Debug, Clone)]
pub struct DiagnosticPatterns {
    step: Regex,
    accuracy: Regex,
    exception: Regex,
}

impl DiagnosticPatterns {
    pub fn new(step: &str, accuracy: &str, exception: &str) -> Result<Self> {
        Ok(Self {
            step: Regex::new(step)?,
            accuracy: Regex::new(accuracy)?,
            exception: Regex::new(exception)?,
        })
    }

    pub fn from_config(triage: &TriageSection) -> Result<Self> {
        Self::new(
            &triage.step_pattern,
            &triage.accuracy_pattern,
            &triage.exception_pattern,
        )
    }
}

/// One step line paired with the accuracy line found at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub step: String,
    pub accuracy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics {
    pub progress: Vec<ProgressReport>,
    pub exceptions: Vec<String>,
    /// Step lines left over after pairing.
    pub unpaired_steps: usize,
    /// Accuracy lines left over after pairing.
    pub unpaired_accuracies: usize,
}

/// Scan `text` line by line.
///
/// Step and accuracy lines are collected independently and paired by
/// position, so `min(steps, accuracies)` reports come out and any trailing
/// surplus on either side is dropped (counted in `unpaired_*`).
pub fn scan(text: &str, patterns: &DiagnosticPatterns) -> Diagnostics {
    let mut steps = Vec::new();
    let mut accuracies = Vec::new();
    let mut exceptions = Vec::new();

    for line in text.lines() {
        if let Some(m) = patterns.step.find(line) {
            steps.push(m.as_str().to_string());
        }
        if let Some(m) = patterns.accuracy.find(line) {
            accuracies.push(m.as_str().to_string());
        }
        if let Some(m) = patterns.exception.find(line) {
            exceptions.push(m.as_str().to_string());
        }
    }

    let unpaired_steps = steps.len().saturating_sub(accuracies.len());
    let unpaired_accuracies = accuracies.len().saturating_sub(steps.len());

    if unpaired_steps > 0 || unpaired_accuracies > 0 {
        warn!(
            steps = steps.len(),
            accuracies = accuracies.len(),
            "step and accuracy line counts differ; unpaired lines are dropped"
        );
    }

    let progress = steps
        .into_iter()
        .zip(accuracies)
        .map(|(step, accuracy)| ProgressReport { step, accuracy })
        .collect();

    Diagnostics {
        progress,
        exceptions,
        unpaired_steps,
        unpaired_accuracies,
    }
}
