#![allow(dead_code)]

use std::path::Path;

use sourcepredict_wf::config::{ConfigFile, LaunchPlan, ParameterSpec, RawConfigFile};
use sourcepredict_wf::inputs::WorkflowInputs;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn program(mut self, program: &str) -> Self {
        self.config.tool.program = program.to_string();
        self
    }

    pub fn capture_output(mut self, val: bool) -> Self {
        self.config.tool.capture_output = val;
        self
    }

    pub fn step_pattern(mut self, pattern: &str) -> Self {
        self.config.triage.step_pattern = pattern.to_string();
        self
    }

    pub fn accuracy_pattern(mut self, pattern: &str) -> Self {
        self.config.triage.accuracy_pattern = pattern.to_string();
        self
    }

    pub fn exception_pattern(mut self, pattern: &str) -> Self {
        self.config.triage.exception_pattern = pattern.to_string();
        self
    }

    pub fn error_title(mut self, title: &str) -> Self {
        self.config.triage.error_title = title.to_string();
        self
    }

    pub fn result_glob(mut self, glob: &str) -> Self {
        self.config.output.result_glob = glob.to_string();
        self
    }

    pub fn parameter(mut self, input: &str, display_name: &str) -> Self {
        self.config.parameter.insert(
            input.to_string(),
            ParameterSpec {
                display_name: display_name.to_string(),
                description: None,
                section_title: None,
            },
        );
        self
    }

    pub fn launch_plan(mut self, name: &str, plan: LaunchPlan) -> Self {
        self.config.launch_plan.insert(name.to_string(), plan);
        self
    }

    /// The raw config, for tests that exercise validation directly.
    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Inputs rooted in one directory: `sources.csv`, `labels.csv`, `sink.csv`
/// and an `out/` output directory.
pub fn inputs_in(dir: &Path) -> WorkflowInputs {
    WorkflowInputs {
        sources_csv: dir.join("sources.csv"),
        labels_csv: dir.join("labels.csv"),
        sink_count_file: dir.join("sink.csv"),
        output_dir: dir.join("out"),
    }
}
