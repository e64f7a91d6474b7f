// tests/workflow_fake_runner.rs

mod common;
use crate::common::{ConfigFileBuilder, RecordingNotifier, ScriptedRunner, init_tracing};

use std::error::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sourcepredict_wf::errors::WorkflowError;
use sourcepredict_wf::exec::OutputMode;
use sourcepredict_wf::fs::mock::MockFileSystem;
use sourcepredict_wf::inputs::WorkflowInputs;
use sourcepredict_wf::notify::Notification;
use sourcepredict_wf::types::CapturedOutput;
use sourcepredict_wf::workflow::{Workflow, WorkflowOptions};

type TestResult = Result<(), Box<dyn Error>>;

fn mock_inputs(fs: &MockFileSystem) -> WorkflowInputs {
    fs.add_file("/data/sources.csv", b"TAXID,src\n".to_vec());
    fs.add_file("/data/labels.csv", b"sample,label\n".to_vec());
    fs.add_file("/data/sink.csv", b"TAXID,sink\n".to_vec());
    WorkflowInputs {
        sources_csv: PathBuf::from("/data/sources.csv"),
        labels_csv: PathBuf::from("/data/labels.csv"),
        sink_count_file: PathBuf::from("/data/sink.csv"),
        output_dir: PathBuf::from("/results"),
    }
}

fn workflow(
    runner: ScriptedRunner,
    notifier: &RecordingNotifier,
    fs: &MockFileSystem,
) -> Workflow {
    Workflow::from_config(&ConfigFileBuilder::new().build())
        .unwrap()
        .with_runner(Box::new(runner))
        .with_notifier(Box::new(notifier.clone()))
        .with_fs(Arc::new(fs.clone()))
}

#[tokio::test]
async fn success_returns_only_matching_result_files() -> TestResult {
    init_tracing();
    let fs = MockFileSystem::new();
    let inputs = mock_inputs(&fs);
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(
        0,
        "Step 1: reduce\nTesting Accuracy: 0.91\nStep 2: classify\nTesting Accuracy: 0.95\n",
    ))
    .writing(&fs, &["sample.sourcepredict.csv", "notes.txt"]);

    let results = workflow(runner, &notifier, &fs).run(inputs).await?;

    assert_eq!(results, vec![PathBuf::from("/results/sample.sourcepredict.csv")]);
    assert_eq!(
        notifier.all(),
        vec![
            Notification::info("Step 1: reduce", "Testing Accuracy: 0.91"),
            Notification::info("Step 2: classify", "Testing Accuracy: 0.95"),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn tool_failure_notifies_and_returns_tool_failed() {
    let fs = MockFileSystem::new();
    let inputs = mock_inputs(&fs);
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(1, "Exception: ValueError bad input\n"))
        .writing(&fs, &["partial.sourcepredict.csv"]);

    let result = workflow(runner, &notifier, &fs).run(inputs).await;

    assert!(matches!(result, Err(WorkflowError::ToolFailed)));
    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].body, "Exception: ValueError bad input");
}

#[tokio::test]
async fn no_results_is_an_empty_success() -> TestResult {
    let fs = MockFileSystem::new();
    let inputs = mock_inputs(&fs);
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(0, "all good"));

    let results = workflow(runner, &notifier, &fs).run(inputs).await?;

    assert!(results.is_empty());
    assert!(notifier.all().is_empty());
    Ok(())
}

#[tokio::test]
async fn builds_the_fixed_command_shape_and_runs_in_output_dir() -> TestResult {
    let fs = MockFileSystem::new();
    let inputs = mock_inputs(&fs);
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(0, ""));
    let calls = runner.calls();

    workflow(runner, &notifier, &fs).run(inputs).await?;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (cmd, mode) = &calls[0];
    assert_eq!(*mode, OutputMode::Capture);
    assert_eq!(cmd.program(), "sourcepredict");
    let expected: Vec<OsString> = ["-s", "/data/sources.csv", "-l", "/data/labels.csv", "/data/sink.csv"]
        .iter()
        .map(OsString::from)
        .collect();
    assert_eq!(cmd.args(), expected.as_slice());
    assert_eq!(cmd.working_dir(), Some(Path::new("/results")));
    Ok(())
}

#[tokio::test]
async fn fire_and_glob_collects_even_after_nonzero_exit() -> TestResult {
    let fs = MockFileSystem::new();
    let inputs = mock_inputs(&fs);
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(1, "Exception: ignored"))
        .writing(&fs, &["dog.sourcepredict.csv"]);
    let calls = runner.calls();

    let results = workflow(runner, &notifier, &fs)
        .with_options(WorkflowOptions { capture: false })
        .run(inputs)
        .await?;

    assert_eq!(results, vec![PathBuf::from("/results/dog.sourcepredict.csv")]);
    assert!(notifier.all().is_empty());
    assert_eq!(calls.lock().unwrap()[0].1, OutputMode::Inherit);
    Ok(())
}

#[tokio::test]
async fn missing_input_file_fails_before_running() {
    let fs = MockFileSystem::new();
    let mut inputs = mock_inputs(&fs);
    inputs.labels_csv = PathBuf::from("/data/missing.csv");
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(0, ""));
    let calls = runner.calls();

    let result = workflow(runner, &notifier, &fs).run(inputs).await;

    match result {
        Err(WorkflowError::InvalidInput(msg)) => {
            assert!(msg.contains("labels_csv"));
            assert!(msg.contains("/data/missing.csv"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn output_dir_that_is_a_file_is_rejected() {
    let fs = MockFileSystem::new();
    let mut inputs = mock_inputs(&fs);
    inputs.output_dir = PathBuf::from("/data/sink.csv");
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(0, ""));

    let result = workflow(runner, &notifier, &fs).run(inputs).await;

    assert!(matches!(result, Err(WorkflowError::InvalidInput(_))));
}

#[tokio::test]
async fn program_and_result_glob_follow_config() -> TestResult {
    let fs = MockFileSystem::new();
    let inputs = mock_inputs(&fs);
    let notifier = RecordingNotifier::new();
    let runner = ScriptedRunner::new(CapturedOutput::new(0, ""))
        .writing(&fs, &["a.tsv", "b.sourcepredict.csv"]);
    let calls = runner.calls();

    let cfg = ConfigFileBuilder::new()
        .program("/opt/sp/bin/sourcepredict")
        .result_glob("*.tsv")
        .build();
    let results = Workflow::from_config(&cfg)?
        .with_runner(Box::new(runner))
        .with_notifier(Box::new(notifier.clone()))
        .with_fs(Arc::new(fs.clone()))
        .run(inputs)
        .await?;

    assert_eq!(results, vec![PathBuf::from("/results/a.tsv")]);
    assert_eq!(calls.lock().unwrap()[0].0.program(), "/opt/sp/bin/sourcepredict");
    Ok(())
}
