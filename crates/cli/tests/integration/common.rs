//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary config checkout plus a `bin/` directory of
/// fake external tools. Every fake tool appends its arguments to `<name>.log`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("bin")).unwrap();
    Self { temp }
  }

  /// Write a file relative to the checkout root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn log_path(&self, tool: &str) -> PathBuf {
    self.temp.path().join(format!("{}.log", tool))
  }

  /// Invocations recorded by a fake tool, one per line.
  pub fn log(&self, tool: &str) -> Vec<String> {
    std::fs::read_to_string(self.log_path(tool))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Install `bin/<name>`, which logs its arguments and then runs `body`.
  pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.temp.path().join("bin").join(name);
    let script = format!(
      "#!/bin/sh\necho \"$@\" >> '{}'\n{}\n",
      self.log_path(name).display(),
      body
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Install a fake `west` that succeeds, or exits with `code` for `shield`.
  pub fn fake_west(&self, fail: Option<(&str, i32)>) -> PathBuf {
    let body = match fail {
      Some((shield, code)) => format!(
        "case \"$*\" in\n  *-DSHIELD={}*) exit {} ;;\nesac",
        shield, code
      ),
      None => String::new(),
    };
    self.fake_tool("west", &body)
  }

  fn base(&self, mut cmd: Command) -> Command {
    cmd.env("OFFSETKEY_ROOT", self.temp.path());
    cmd.env("OFFSETKEY_WEST", self.temp.path().join("bin").join("west"));
    cmd.env("OFFSETKEY_KEYMAP_DRAWER", self.temp.path().join("bin").join("keymap"));
    cmd.env("OFFSETKEY_GIT", self.temp.path().join("bin").join("git"));
    cmd.env_remove("OFFSETKEY_BOARD");
    cmd.env_remove("RUST_LOG");
    // Keep output uncolored regardless of the host environment.
    cmd.env_remove("FORCE_COLOR");
    cmd.env_remove("CLICOLOR_FORCE");
    cmd
  }

  /// `offsetkey-build` pointed at this environment.
  pub fn build_cmd(&self) -> Command {
    self.base(cargo_bin_cmd!("offsetkey-build"))
  }

  /// `offsetkey` pointed at this environment.
  pub fn offsetkey_cmd(&self) -> Command {
    self.base(cargo_bin_cmd!("offsetkey"))
  }
}
