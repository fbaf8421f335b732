mod actions;
mod build;
mod draw;
mod publish;
mod settings;
mod targets;

pub use actions::cmd_actions;
pub use build::{BuildArgs, cmd_build, exit_with_usage, is_build_invocation};
pub use draw::cmd_draw;
pub use publish::cmd_publish;
pub use settings::cmd_settings;
pub use targets::cmd_targets;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Single-threaded runtime for driving subprocesses one at a time.
fn runtime() -> Result<Runtime> {
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}
