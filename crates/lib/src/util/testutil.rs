//! Test utilities for offsetkey-lib.
//!
//! The build, diagram and git helpers all drive external programs. Tests replace
//! those programs with small shell scripts written into a temp directory.

use std::path::{Path, PathBuf};

/// Writes an executable `/bin/sh` script named `name` into `dir` and returns its path.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join(name);
  std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}

/// Reads a log written by a fake tool, one invocation per line.
pub fn read_log(path: &Path) -> Vec<String> {
  std::fs::read_to_string(path)
    .unwrap_or_default()
    .lines()
    .map(str::to_string)
    .collect()
}
