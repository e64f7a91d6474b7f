// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs the external tool with `tokio::process::Command` and hands back its
//! exit code and captured output.
//!
//! - [`command`] builds the tool's command line from resolved inputs.
//! - [`runner`] spawns the process and streams its merged output.
//! - [`backend`] provides the `RunnerBackend` trait the workflow depends
//!   on, implemented by [`ProcessRunner`] and by fakes in tests.

pub mod backend;
pub mod command;
pub mod runner;

pub use backend::{OutputMode, RunnerBackend};
pub use command::ToolCommand;
pub use runner::ProcessRunner;
