//! Result and error types for firmware builds.

use std::io;

use thiserror::Error;

use super::BuildTarget;

/// Errors from a single build invocation.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The build tool ran and exited unsuccessfully.
  #[error("build of {target} failed with exit code {code:?}")]
  Failed { target: &'static str, code: Option<i32> },

  /// The build tool could not be started at all.
  #[error("failed to run {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },
}

impl BuildError {
  /// Process exit code to surface for this failure.
  ///
  /// The tool's own code when it has one, otherwise 1 (killed by a signal, or never
  /// started).
  pub fn exit_code(&self) -> i32 {
    match self {
      BuildError::Failed { code: Some(code), .. } if *code != 0 => *code,
      _ => 1,
    }
  }
}

/// What to do with the remaining targets after one fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
  /// Stop at the first failure and skip everything after it.
  #[default]
  FailFast,
  /// Attempt every target and collect all failures.
  KeepGoing,
}

/// Outcome of a dispatch run.
#[derive(Debug, Default)]
pub struct BuildReport {
  /// Targets that built successfully, in build order.
  pub built: Vec<BuildTarget>,
  /// Targets that failed, in build order.
  pub failed: Vec<(BuildTarget, BuildError)>,
  /// Targets never attempted because an earlier one failed.
  pub skipped: Vec<BuildTarget>,
}

impl BuildReport {
  pub fn is_success(&self) -> bool {
    self.failed.is_empty() && self.skipped.is_empty()
  }

  /// Exit code of the first failure, or 0.
  pub fn exit_code(&self) -> i32 {
    self.failed.first().map_or(0, |(_, err)| err.exit_code())
  }
}
