// src/types.rs

/// What a single tool run produced: its exit status and everything it wrote
/// to the merged stdout/stderr stream.
///
/// `text` holds the emitted lines in order, without their terminators,
/// joined by `'\n'`. A process that died without an exit code (e.g. killed
/// by a signal) reports `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub text: String,
}

impl CapturedOutput {
    pub fn new(exit_code: i32, text: impl Into<String>) -> Self {
        Self {
            exit_code,
            text: text.into(),
        }
    }

    /// Build from individual lines, joining them the same way the runner does.
    pub fn from_lines<I, S>(exit_code: i32, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines.into_iter().map(|l| l.as_ref().to_string()).collect();
        Self {
            exit_code,
            text: lines.join("\n"),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
