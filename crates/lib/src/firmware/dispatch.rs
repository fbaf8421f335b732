//! Sequential build dispatch.
//!
//! [`dispatch`] walks the selector's targets in order and awaits each build before
//! starting the next. How a build runs and how progress is shown are both behind
//! traits so the CLI and the tests can plug in their own.

use tracing::{info, warn};

use super::types::{BuildError, BuildReport, FailurePolicy};
use super::{BuildTarget, Selector};
use crate::config::BuildConfig;

/// Runs the external build for one target.
#[allow(async_fn_in_trait)]
pub trait BuildRunner {
  async fn build(&self, target: &BuildTarget, config: &BuildConfig) -> Result<(), BuildError>;
}

/// Receives progress events from [`dispatch`].
pub trait BuildReporter {
  /// Called before a target's build starts.
  fn started(&mut self, target: &BuildTarget);

  /// Called after a target built successfully.
  fn built(&mut self, target: &BuildTarget);

  /// Called after a target's build failed. Ignored by default.
  fn failed(&mut self, _target: &BuildTarget, _error: &BuildError) {}

  /// Called once when an `all` run finished without failures.
  fn finished(&mut self, targets: &[BuildTarget]);
}

/// Builds every target the selector names, in order.
///
/// With [`FailurePolicy::FailFast`] the first failure ends the run and the remaining
/// targets are recorded as skipped.
pub async fn dispatch<R, P>(
  selector: Selector,
  config: &BuildConfig,
  runner: &R,
  reporter: &mut P,
  policy: FailurePolicy,
) -> BuildReport
where
  R: BuildRunner,
  P: BuildReporter,
{
  let targets = selector.targets();
  let mut report = BuildReport::default();

  info!(selector = %selector, count = targets.len(), "dispatching firmware builds");

  for (index, target) in targets.iter().enumerate() {
    reporter.started(target);

    match runner.build(target, config).await {
      Ok(()) => {
        reporter.built(target);
        report.built.push(*target);
      }
      Err(err) => {
        warn!(identifier = target.identifier, error = %err, "build failed");
        reporter.failed(target, &err);
        report.failed.push((*target, err));

        if policy == FailurePolicy::FailFast {
          report.skipped.extend_from_slice(&targets[index + 1..]);
          break;
        }
      }
    }
  }

  if selector.is_all() && report.is_success() {
    reporter.finished(targets);
  }

  report
}
