// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `sourcepredict-wf`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sourcepredict-wf",
    version,
    about = "Predict the source of a metagenomic sample with SourcePredict.",
    long_about = None
)]
pub struct CliArgs {
    /// Source taxonomic count table (CSV).
    #[arg(short = 's', long = "sources", value_name = "PATH")]
    pub sources_csv: Option<PathBuf>,

    /// Source label table (CSV).
    #[arg(short = 'l', long = "labels", value_name = "PATH")]
    pub labels_csv: Option<PathBuf>,

    /// Sink sample's taxonomic count table (CSV).
    #[arg(value_name = "SINK_COUNT_FILE")]
    pub sink_count_file: Option<PathBuf>,

    /// Directory where result files are written and collected from.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Sourcepredict.toml` in the current working directory. The
    /// default file is optional; an explicitly given path must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Take inputs from a named `[launch_plan."<NAME>"]` in the config.
    ///
    /// Inputs given explicitly on the command line win over the plan.
    #[arg(long, value_name = "NAME")]
    pub launch_plan: Option<String>,

    /// Override the external program (default `sourcepredict`).
    #[arg(long, value_name = "NAME")]
    pub program: Option<String>,

    /// Run the tool without capturing or triaging its output, then collect
    /// result files regardless of its exit code.
    #[arg(long)]
    pub no_capture: bool,

    /// Do not echo the tool's output lines to stdout.
    #[arg(long)]
    pub quiet: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SOURCEPREDICT_WF_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve inputs and print the command, but don't run it.
    #[arg(long)]
    pub dry_run: bool,

    /// Print workflow metadata and parameter declarations, then exit.
    #[arg(long)]
    pub describe: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
