// src/exec/runner.rs

//! Runs the external tool as a child process.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::Stdio;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::{Result, WorkflowError};
use crate::exec::command::ToolCommand;
use crate::types::CapturedOutput;

/// Spawns one child per call and blocks until it exits. No retries, no
/// timeout.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    echo: bool,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self { echo: true }
    }
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether captured lines are echoed to our own stdout as they arrive.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run `command` with stdout and stderr merged into one pipe and return
    /// the exit code plus every line it wrote, in emission order.
    ///
    /// The exit code is not interpreted here. Errors are limited to the
    /// process failing to spawn or the pipe failing.
    pub async fn run_captured(&self, command: &ToolCommand) -> Result<CapturedOutput> {
        info!(program = %command.program(), cmd = %command, "starting tool process");

        // One pipe for both streams keeps the child's own interleaving.
        let (reader, writer) = io::pipe()?;

        let mut cmd = command.to_process_command();
        cmd.stdout(writer.try_clone()?)
            .stderr(writer)
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| WorkflowError::Spawn {
            program: command.program().to_string(),
            source,
        })?;

        // `cmd` still owns our copies of the write end; the reader only sees
        // EOF once they are closed.
        drop(cmd);

        let (line_tx, mut line_rx) = mpsc::channel::<String>(256);
        let reader_handle = tokio::task::spawn_blocking(move || forward_lines(reader, line_tx));

        let mut lines = Vec::new();
        while let Some(line) = line_rx.recv().await {
            if self.echo {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{line}");
            }
            lines.push(line);
        }

        let status = child.wait().await?;
        reader_handle.await.map_err(|e| anyhow!("output reader panicked: {e}"))??;

        let exit_code = status.code().unwrap_or(-1);
        info!(
            program = %command.program(),
            exit_code,
            lines = lines.len(),
            "tool process exited"
        );

        Ok(CapturedOutput {
            exit_code,
            text: lines.join("\n"),
        })
    }

    /// Run `command` with inherited stdio and return only its exit code.
    ///
    /// Used when output capture is switched off; `text` is always empty.
    pub async fn run_inherited(&self, command: &ToolCommand) -> Result<CapturedOutput> {
        info!(program = %command.program(), cmd = %command, "starting tool process (output not captured)");

        let mut cmd = command.to_process_command();
        cmd.stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let status = cmd
            .spawn()
            .map_err(|source| WorkflowError::Spawn {
                program: command.program().to_string(),
                source,
            })?
            .wait()
            .await?;

        let exit_code = status.code().unwrap_or(-1);
        info!(program = %command.program(), exit_code, "tool process exited");

        Ok(CapturedOutput {
            exit_code,
            text: String::new(),
        })
    }
}

/// Read `reader` to EOF, sending one decoded line per message.
///
/// Runs on a blocking thread. Stops early if the receiver is gone.
fn forward_lines(reader: impl Read, tx: mpsc::Sender<String>) -> io::Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut count = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;
        if tx.blocking_send(decode_line(&buf)).is_err() {
            debug!("line receiver dropped; stopping output reader");
            break;
        }
    }

    Ok(count)
}

/// Strip the line terminator (`\n` or `\r\n`) and decode lossily.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
