//! Firmware builds: the target table, the sequential dispatcher and the `west` runner.

mod dispatch;
mod target;
mod types;
mod west;

pub use dispatch::{BuildReporter, BuildRunner, dispatch};
pub use target::{BuildTarget, Selector, SelectorError, TARGETS, find_target, usage};
pub use types::{BuildError, BuildReport, FailurePolicy};
pub use west::WestRunner;
