//! Command implementations shared by the `offsetkey` and `offsetkey-build` binaries.

pub mod cmd;
pub mod output;
pub mod prompts;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` controls the filter (errors only when unset); `--verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
