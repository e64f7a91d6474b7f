use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use sourcepredict_wf::errors::Result;
use sourcepredict_wf::exec::{OutputMode, RunnerBackend, ToolCommand};
use sourcepredict_wf::fs::mock::MockFileSystem;
use sourcepredict_wf::types::CapturedOutput;

/// A runner that never spawns anything:
/// - records each command and output mode it was asked to run
/// - "writes" the configured files into the command's working directory on
///   a `MockFileSystem`
/// - returns a canned `CapturedOutput` (text is dropped in `Inherit` mode,
///   like the real runner).
pub struct ScriptedRunner {
    output: CapturedOutput,
    fs: Option<MockFileSystem>,
    writes: Vec<String>,
    calls: Arc<Mutex<Vec<(ToolCommand, OutputMode)>>>,
}

impl ScriptedRunner {
    pub fn new(output: CapturedOutput) -> Self {
        Self {
            output,
            fs: None,
            writes: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Files (by name) to create in the working directory on each run.
    pub fn writing(mut self, fs: &MockFileSystem, file_names: &[&str]) -> Self {
        self.fs = Some(fs.clone());
        self.writes = file_names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Shared handle on the recorded calls.
    pub fn calls(&self) -> Arc<Mutex<Vec<(ToolCommand, OutputMode)>>> {
        Arc::clone(&self.calls)
    }
}

impl RunnerBackend for ScriptedRunner {
    fn run<'a>(
        &'a self,
        command: &'a ToolCommand,
        mode: OutputMode,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push((command.clone(), mode));

            if let Some(fs) = &self.fs {
                let dir = command
                    .working_dir()
                    .map(|d| d.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."));
                for name in &self.writes {
                    fs.add_file(dir.join(name), b"sample,prediction\n".to_vec());
                }
            }

            Ok(match mode {
                OutputMode::Capture => self.output.clone(),
                OutputMode::Inherit => CapturedOutput::new(self.output.exit_code, ""),
            })
        })
    }
}
