// tests/inputs_resolution.rs

mod common;
use crate::common::ConfigFileBuilder;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use sourcepredict_wf::cli::CliArgs;
use sourcepredict_wf::config::LaunchPlan;
use sourcepredict_wf::errors::WorkflowError;
use sourcepredict_wf::resolve_inputs;

type TestResult = Result<(), Box<dyn Error>>;

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["sourcepredict-wf"];
    full.extend_from_slice(argv);
    CliArgs::try_parse_from(full).expect("valid command line")
}

fn example_plan() -> LaunchPlan {
    LaunchPlan {
        sources_csv: Some(PathBuf::from("plan/sources.csv")),
        labels_csv: Some(PathBuf::from("plan/labels.csv")),
        sink_count_file: Some(PathBuf::from("plan/sink.csv")),
        output_dir: Some(PathBuf::from("plan/out")),
    }
}

#[test]
fn command_line_mirrors_tool_flags() -> TestResult {
    let cfg = ConfigFileBuilder::new().build();
    let a = args(&["-s", "src.csv", "-l", "lab.csv", "sink.csv", "-o", "out"]);

    let inputs = resolve_inputs(&a, &cfg)?;

    assert_eq!(inputs.sources_csv, PathBuf::from("src.csv"));
    assert_eq!(inputs.labels_csv, PathBuf::from("lab.csv"));
    assert_eq!(inputs.sink_count_file, PathBuf::from("sink.csv"));
    assert_eq!(inputs.output_dir, PathBuf::from("out"));
    Ok(())
}

#[test]
fn missing_inputs_are_all_listed() {
    let cfg = ConfigFileBuilder::new().build();
    let a = args(&["-s", "src.csv"]);

    match resolve_inputs(&a, &cfg) {
        Err(WorkflowError::InvalidInput(msg)) => {
            assert!(msg.contains("labels_csv"));
            assert!(msg.contains("sink_count_file"));
            assert!(msg.contains("output_dir"));
            assert!(!msg.contains("sources_csv"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn launch_plan_supplies_inputs() -> TestResult {
    let cfg = ConfigFileBuilder::new()
        .launch_plan("Example SourcePredict Data", example_plan())
        .build();
    let a = args(&["--launch-plan", "Example SourcePredict Data"]);

    let inputs = resolve_inputs(&a, &cfg)?;

    assert_eq!(inputs.sources_csv, PathBuf::from("plan/sources.csv"));
    assert_eq!(inputs.output_dir, PathBuf::from("plan/out"));
    Ok(())
}

#[test]
fn command_line_overrides_launch_plan_per_field() -> TestResult {
    let cfg = ConfigFileBuilder::new()
        .launch_plan("example", example_plan())
        .build();
    let a = args(&["--launch-plan", "example", "other_sink.csv", "-o", "elsewhere"]);

    let inputs = resolve_inputs(&a, &cfg)?;

    assert_eq!(inputs.sources_csv, PathBuf::from("plan/sources.csv"));
    assert_eq!(inputs.labels_csv, PathBuf::from("plan/labels.csv"));
    assert_eq!(inputs.sink_count_file, PathBuf::from("other_sink.csv"));
    assert_eq!(inputs.output_dir, PathBuf::from("elsewhere"));
    Ok(())
}

#[test]
fn unknown_launch_plan_is_a_config_error() {
    let cfg = ConfigFileBuilder::new()
        .launch_plan("example", example_plan())
        .build();
    let a = args(&["--launch-plan", "nope"]);

    match resolve_inputs(&a, &cfg) {
        Err(WorkflowError::ConfigError(msg)) => {
            assert!(msg.contains("nope"));
            assert!(msg.contains("example"));
        }
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn cli_switches_parse() {
    let a = args(&["--no-capture", "--quiet", "--dry-run", "--program", "sp", "--log-level", "debug"]);
    assert!(a.no_capture);
    assert!(a.quiet);
    assert!(a.dry_run);
    assert_eq!(a.program.as_deref(), Some("sp"));
    assert!(a.log_level.is_some());
}
