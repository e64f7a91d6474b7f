// tests/dry_run.rs
//
// Dry-run output shows the command exactly as a run would execute it.

mod common;
use crate::common::{ConfigFileBuilder, inputs_in, write_input_files};

use std::error::Error;
use std::fs;

use sourcepredict_wf::errors::WorkflowError;
use sourcepredict_wf::workflow::Workflow;
use sourcepredict_wf::write_dry_run;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn dry_run_shows_absolute_paths_and_working_directory() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_input_files(dir.path());
    let workflow = Workflow::from_config(&ConfigFileBuilder::new().build())?;

    let inputs = workflow.prepare(inputs_in(dir.path()))?;
    let mut out = Vec::new();
    write_dry_run(&workflow, &inputs, &mut out)?;
    let text = String::from_utf8(out)?;

    let root = fs::canonicalize(dir.path())?;
    let out_dir = root.join("out");
    assert!(out_dir.is_dir(), "output_dir is created by prepare");
    let expected_command = format!(
        "  sourcepredict -s {} -l {} {}\n",
        root.join("sources.csv").display(),
        root.join("labels.csv").display(),
        root.join("sink.csv").display(),
    );
    assert!(text.contains(&expected_command), "got:\n{text}");
    assert!(text.contains(&format!("working directory:\n  {}\n", out_dir.display())));
    assert!(text.contains(&format!("  output_dir      = {}\n", out_dir.display())));
    Ok(())
}

#[test]
fn dry_run_preparation_rejects_missing_inputs() -> TestResult {
    let dir = tempfile::tempdir()?;
    let workflow = Workflow::from_config(&ConfigFileBuilder::new().build())?;

    let result = workflow.prepare(inputs_in(dir.path()));

    assert!(matches!(result, Err(WorkflowError::InvalidInput(_))));
    Ok(())
}
