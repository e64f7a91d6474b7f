// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::inputs::PartialInputs;

/// Names of the workflow's declared inputs, in declaration order.
pub const INPUT_NAMES: [&str; 4] = ["sources_csv", "labels_csv", "sink_count_file", "output_dir"];

pub const DEFAULT_PROGRAM: &str = "sourcepredict";
pub const DEFAULT_RESULT_GLOB: &str = "*.sourcepredict.csv";
pub const DEFAULT_STEP_PATTERN: &str = "^Step.*";
pub const DEFAULT_ACCURACY_PATTERN: &str = "^Testing Accuracy.*";
pub const DEFAULT_EXCEPTION_PATTERN: &str = "^Exception.*";
pub const DEFAULT_ERROR_TITLE: &str = "An error was raised while running SourcePredict";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [tool]
/// program = "sourcepredict"
/// capture_output = true
///
/// [triage]
/// step_pattern = "^Step.*"
///
/// [output]
/// result_glob = "*.sourcepredict.csv"
///
/// [launch_plan."Example SourcePredict Data"]
/// sources_csv = "data/sources.csv"
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub tool: ToolSection,

    #[serde(default)]
    pub triage: TriageSection,

    #[serde(default)]
    pub output: OutputSection,

    /// Workflow metadata from `[workflow]`.
    #[serde(default)]
    pub workflow: WorkflowMetadata,

    /// Parameter declarations from `[parameter.<input>]`.
    ///
    /// When the table is absent entirely, the built-in declarations for the
    /// four inputs are used.
    #[serde(default = "default_parameters")]
    pub parameter: BTreeMap<String, ParameterSpec>,

    /// Named input presets from `[launch_plan."<name>"]`.
    #[serde(default)]
    pub launch_plan: BTreeMap<String, LaunchPlan>,
}

impl Default for RawConfigFile {
    fn default() -> Self {
        Self {
            tool: ToolSection::default(),
            triage: TriageSection::default(),
            output: OutputSection::default(),
            workflow: WorkflowMetadata::default(),
            parameter: default_parameters(),
            launch_plan: BTreeMap::new(),
        }
    }
}

/// Validated configuration. Only constructible through
/// `ConfigFile::try_from(RawConfigFile)` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    tool: ToolSection,
    triage: TriageSection,
    output: OutputSection,
    workflow: WorkflowMetadata,
    parameter: BTreeMap<String, ParameterSpec>,
    launch_plan: BTreeMap<String, LaunchPlan>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            tool: raw.tool,
            triage: raw.triage,
            output: raw.output,
            workflow: raw.workflow,
            parameter: raw.parameter,
            launch_plan: raw.launch_plan,
        }
    }

    pub fn tool(&self) -> &ToolSection {
        &self.tool
    }

    pub fn triage(&self) -> &TriageSection {
        &self.triage
    }

    pub fn output(&self) -> &OutputSection {
        &self.output
    }

    pub fn workflow(&self) -> &WorkflowMetadata {
        &self.workflow
    }

    /// Parameter declarations keyed by input name.
    pub fn parameters(&self) -> &BTreeMap<String, ParameterSpec> {
        &self.parameter
    }

    pub fn launch_plans(&self) -> &BTreeMap<String, LaunchPlan> {
        &self.launch_plan
    }

    pub fn launch_plan(&self, name: &str) -> Option<&LaunchPlan> {
        self.launch_plan.get(name)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}

/// `[tool]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolSection {
    /// External program to invoke.
    #[serde(default = "default_program")]
    pub program: String,

    /// Capture and triage the tool's output (`true`), or fire-and-glob
    /// (`false`).
    #[serde(default = "default_true")]
    pub capture_output: bool,
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            capture_output: true,
        }
    }
}

/// `[triage]` section: line patterns used to pick diagnostics out of the
/// tool's output.
#[derive(Debug, Clone, Deserialize)]
pub struct TriageSection {
    #[serde(default = "default_step_pattern")]
    pub step_pattern: String,

    #[serde(default = "default_accuracy_pattern")]
    pub accuracy_pattern: String,

    #[serde(default = "default_exception_pattern")]
    pub exception_pattern: String,

    /// Title used for every error notification.
    #[serde(default = "default_error_title")]
    pub error_title: String,
}

impl Default for TriageSection {
    fn default() -> Self {
        Self {
            step_pattern: default_step_pattern(),
            accuracy_pattern: default_accuracy_pattern(),
            exception_pattern: default_exception_pattern(),
            error_title: default_error_title(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Glob matched against file names directly inside the output directory.
    #[serde(default = "default_result_glob")]
    pub result_glob: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            result_glob: default_result_glob(),
        }
    }
}

/// `[workflow]` section: descriptive metadata shown by `--describe`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowMetadata {
    #[serde(default = "default_display_name")]
    pub display_name: String,

    #[serde(default)]
    pub documentation: Option<String>,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default)]
    pub license: Option<String>,
}

impl Default for WorkflowMetadata {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            documentation: Some(
                "https://github.com/jvfe/sourcepredict_latch/blob/main/README.md".to_string(),
            ),
            author: Some(Author {
                name: "jvfe".to_string(),
                github: Some("https://github.com/jvfe".to_string()),
            }),
            repository: Some("https://github.com/jvfe/sourcepredict_latch".to_string()),
            license: Some("MIT".to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub github: Option<String>,
}

/// `[parameter.<input>]` declaration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ParameterSpec {
    pub display_name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Starts a new section in listings when set.
    #[serde(default)]
    pub section_title: Option<String>,
}

/// `[launch_plan."<name>"]`: a named set of input values.
///
/// Relative paths in a plan loaded from a file are resolved against that
/// file's directory.
pub type LaunchPlan = PartialInputs;

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_true() -> bool {
    true
}

fn default_step_pattern() -> String {
    DEFAULT_STEP_PATTERN.to_string()
}

fn default_accuracy_pattern() -> String {
    DEFAULT_ACCURACY_PATTERN.to_string()
}

fn default_exception_pattern() -> String {
    DEFAULT_EXCEPTION_PATTERN.to_string()
}

fn default_error_title() -> String {
    DEFAULT_ERROR_TITLE.to_string()
}

fn default_result_glob() -> String {
    DEFAULT_RESULT_GLOB.to_string()
}

fn default_display_name() -> String {
    "SourcePredict".to_string()
}

/// Built-in declarations for the four inputs.
pub fn default_parameters() -> BTreeMap<String, ParameterSpec> {
    let decl = |display_name: &str, description: &str, section: Option<&str>| ParameterSpec {
        display_name: display_name.to_string(),
        description: Some(description.to_string()),
        section_title: section.map(str::to_string),
    };

    BTreeMap::from([
        (
            "sources_csv".to_string(),
            decl("Source taxonomic count file", "Path to source csv file.", Some("Data")),
        ),
        (
            "labels_csv".to_string(),
            decl("Source label file", "Path to labels csv file.", None),
        ),
        (
            "sink_count_file".to_string(),
            decl(
                "Sink taxonomic count file",
                "Path to sink TAXID count table in csv format",
                None,
            ),
        ),
        (
            "output_dir".to_string(),
            decl(
                "Output directory",
                "Specify directory where output files should be sent to",
                None,
            ),
        ),
    ])
}
