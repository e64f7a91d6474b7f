// src/outputs.rs

//! Collection of result files from the output directory.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;

/// File-name glob for the files a run is expected to leave behind.
#[derive(Debug, Clone)]
pub struct ResultPattern {
    pattern: String,
    matcher: GlobMatcher,
}

impl ResultPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether a bare file name (no directory part) matches.
    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

/// List the files directly inside `output_dir` whose names match `pattern`,
/// sorted by path.
///
/// No matches is an empty list, not an error. A missing directory is
/// treated the same way.
pub fn collect_results(
    fs: &dyn FileSystem,
    output_dir: &Path,
    pattern: &ResultPattern,
) -> Result<Vec<PathBuf>> {
    if !fs.is_dir(output_dir) {
        warn!(
            output_dir = %output_dir.display(),
            "output directory does not exist; no results to collect"
        );
        return Ok(Vec::new());
    }

    let mut results: Vec<PathBuf> = fs
        .read_dir(output_dir)?
        .into_iter()
        .filter(|path| fs.is_file(path))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| pattern.matches(name))
        })
        .collect();
    results.sort();

    for path in &results {
        debug!(path = %path.display(), "collected result file");
    }
    info!(
        output_dir = %output_dir.display(),
        pattern = pattern.as_str(),
        results = results.len(),
        "collected result files"
    );

    Ok(results)
}
