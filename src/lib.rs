// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod inputs;
pub mod logging;
pub mod notify;
pub mod outputs;
pub mod triage;
pub mod types;
pub mod workflow;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_optional};
use crate::errors::WorkflowError;
use crate::exec::ProcessRunner;
use crate::inputs::{PartialInputs, WorkflowInputs};
use crate::workflow::{Workflow, WorkflowOptions};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - input resolution (command line over launch plan)
/// - the workflow (process runner, triage, result collection)
///
/// Result file paths are printed to stdout, one per line.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_optional(args.config.as_deref())?;

    if args.describe {
        write_description(&cfg, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let inputs = resolve_inputs(&args, &cfg)?;

    let program = args
        .program
        .clone()
        .unwrap_or_else(|| cfg.tool().program.clone());
    let options = WorkflowOptions {
        capture: cfg.tool().capture_output && !args.no_capture,
    };

    let workflow = Workflow::from_config(&cfg)?
        .with_program(program)
        .with_options(options)
        .with_runner(Box::new(ProcessRunner::new().with_echo(!args.quiet)));

    if args.dry_run {
        let inputs = workflow.prepare(inputs)?;
        write_dry_run(&workflow, &inputs, &mut std::io::stdout().lock())?;
        debug!("dry-run complete (no execution)");
        return Ok(());
    }

    info!(
        program = %workflow.program(),
        capture = options.capture,
        "running workflow"
    );

    let results = workflow.run(inputs).await?;

    let mut out = std::io::stdout().lock();
    for path in &results {
        writeln!(out, "{}", path.display())?;
    }

    Ok(())
}

/// Merge explicit command-line inputs over the selected launch plan.
pub fn resolve_inputs(args: &CliArgs, cfg: &ConfigFile) -> Result<WorkflowInputs, WorkflowError> {
    let explicit = PartialInputs {
        sources_csv: args.sources_csv.clone(),
        labels_csv: args.labels_csv.clone(),
        sink_count_file: args.sink_count_file.clone(),
        output_dir: args.output_dir.clone(),
    };

    let merged = match &args.launch_plan {
        Some(name) => {
            let plan = cfg.launch_plan(name).ok_or_else(|| {
                WorkflowError::ConfigError(format!(
                    "unknown launch plan '{name}' (available: {:?})",
                    cfg.launch_plans().keys().collect::<Vec<_>>()
                ))
            })?;
            debug!(launch_plan = %name, "filling inputs from launch plan");
            explicit.or(plan)
        }
        None => explicit,
    };

    merged.complete()
}

/// Dry-run output: prepared inputs and the command a run would execute.
///
/// `inputs` are expected to have gone through [`Workflow::prepare`], so the
/// paths shown are the absolute ones passed to the tool.
pub fn write_dry_run(
    workflow: &Workflow,
    inputs: &WorkflowInputs,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let command = workflow.command_for(inputs);

    writeln!(out, "sourcepredict-wf dry-run")?;
    writeln!(out, "  sources_csv     = {}", inputs.sources_csv.display())?;
    writeln!(out, "  labels_csv      = {}", inputs.labels_csv.display())?;
    writeln!(out, "  sink_count_file = {}", inputs.sink_count_file.display())?;
    writeln!(out, "  output_dir      = {}", inputs.output_dir.display())?;
    writeln!(out, "  capture_output  = {}", workflow.options().capture)?;
    writeln!(out)?;
    writeln!(out, "command:")?;
    writeln!(out, "  {command}")?;
    if let Some(dir) = command.working_dir() {
        writeln!(out, "working directory:")?;
        writeln!(out, "  {}", dir.display())?;
    }
    Ok(())
}

/// `--describe` output: workflow metadata, parameters and launch plans.
pub fn write_description(cfg: &ConfigFile, out: &mut impl Write) -> std::io::Result<()> {
    let meta = cfg.workflow();
    writeln!(out, "{}", meta.display_name)?;
    if let Some(ref doc) = meta.documentation {
        writeln!(out, "  documentation: {doc}")?;
    }
    if let Some(ref author) = meta.author {
        match author.github {
            Some(ref github) => writeln!(out, "  author: {} ({github})", author.name)?,
            None => writeln!(out, "  author: {}", author.name)?,
        }
    }
    if let Some(ref repo) = meta.repository {
        writeln!(out, "  repository: {repo}")?;
    }
    if let Some(ref license) = meta.license {
        writeln!(out, "  license: {license}")?;
    }
    writeln!(out)?;

    writeln!(out, "parameters:")?;
    for name in config::model::INPUT_NAMES {
        let Some(param) = cfg.parameters().get(name) else {
            continue;
        };
        if let Some(ref section) = param.section_title {
            writeln!(out, "  [{section}]")?;
        }
        writeln!(out, "  - {name}: {}", param.display_name)?;
        if let Some(ref description) = param.description {
            writeln!(out, "      {description}")?;
        }
    }

    if !cfg.launch_plans().is_empty() {
        writeln!(out)?;
        writeln!(out, "launch plans:")?;
        for name in cfg.launch_plans().keys() {
            writeln!(out, "  - {name}")?;
        }
    }
    Ok(())
}
