#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub use sourcepredict_wf_test_utils::builders::{ConfigFileBuilder, inputs_in};
pub use sourcepredict_wf_test_utils::{RecordingNotifier, ScriptedRunner, init_tracing, with_timeout};

/// Create the three input CSVs that `inputs_in(dir)` points at.
pub fn write_input_files(dir: &Path) {
    fs::write(dir.join("sources.csv"), "TAXID,src1\n562,10\n").unwrap();
    fs::write(dir.join("labels.csv"), "sample,label\nsrc1,Homo_sapiens\n").unwrap();
    fs::write(dir.join("sink.csv"), "TAXID,sink1\n562,3\n").unwrap();
}

/// Write an executable `sh` script standing in for the external tool.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
