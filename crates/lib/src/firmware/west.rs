//! `west build` runner.
//!
//! Runs the Zephyr meta-tool for one target with inherited stdio, so compiler
//! output streams straight to the terminal. Only the exit status is interpreted.

use std::ffi::OsString;
use std::path::Path;

use tokio::process::Command;
use tracing::{debug, info};

use super::BuildTarget;
use super::dispatch::BuildRunner;
use super::types::BuildError;
use crate::config::BuildConfig;

/// Production [`BuildRunner`] that shells out to `west`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WestRunner;

impl WestRunner {
  /// Arguments for `west` to build `target`:
  ///
  /// ```text
  /// build -s <zmk app> -d build_<id> -b <board> [-p always]
  ///   -- -DSHIELD=<label> -DZMK_CONFIG=<config dir> -DZMK_EXTRA_MODULES=<modules dir>
  /// ```
  pub fn args(target: &BuildTarget, config: &BuildConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
      "build".into(),
      "-s".into(),
      config.toolchain_dir.clone().into(),
      "-d".into(),
      target.build_dir().into(),
      "-b".into(),
      config.board.clone().into(),
    ];

    if config.pristine {
      args.push("-p".into());
      args.push("always".into());
    }

    args.push("--".into());
    args.push(format!("-DSHIELD={}", target.label).into());

    let mut define = |name: &str, value: &Path| {
      let mut arg = OsString::from(format!("-D{name}="));
      arg.push(value.as_os_str());
      args.push(arg);
    };
    define("ZMK_CONFIG", config.config_dir.as_path());
    define("ZMK_EXTRA_MODULES", config.modules_dir.as_path());

    args
  }

  fn command(target: &BuildTarget, config: &BuildConfig) -> Command {
    let mut command = Command::new(&config.west);
    command.args(Self::args(target, config)).current_dir(&config.root);
    command
  }
}

impl BuildRunner for WestRunner {
  async fn build(&self, target: &BuildTarget, config: &BuildConfig) -> Result<(), BuildError> {
    let mut command = Self::command(target, config);

    info!(identifier = target.identifier, shield = target.label, "spawning west");
    debug!(west = %config.west.display(), args = ?Self::args(target, config), "west invocation");

    let status = command.status().await.map_err(|source| BuildError::Spawn {
      program: config.west.display().to_string(),
      source,
    })?;

    if !status.success() {
      return Err(BuildError::Failed {
        target: target.identifier,
        code: status.code(),
      });
    }

    debug!(identifier = target.identifier, "west finished");
    Ok(())
  }
}
