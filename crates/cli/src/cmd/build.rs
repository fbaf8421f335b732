//! Implementation of the firmware build command.
//!
//! Shared by `offsetkey-build [target]` and `offsetkey build [target]`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clap::error::ErrorKind;
use tracing::info;

use offsetkey_lib::config::BuildConfig;
use offsetkey_lib::firmware::{
  BuildError, BuildReporter, BuildTarget, FailurePolicy, Selector, WestRunner, dispatch, usage,
};

use super::runtime;
use crate::output::{print_banner, print_error, print_success};

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
  /// Target to build: left, right, dongle or all
  #[arg(value_name = "TARGET")]
  pub selector: Option<String>,

  /// Board to build for (default: $OFFSETKEY_BOARD or eyelash_nano)
  #[arg(short, long)]
  pub board: Option<String>,

  /// Remove the build directory contents before building
  #[arg(short, long)]
  pub pristine: bool,

  /// Build every selected target even after one fails
  #[arg(long)]
  pub keep_going: bool,
}

/// Prints dispatcher progress to the terminal.
struct TerminalReporter;

impl BuildReporter for TerminalReporter {
  fn started(&mut self, target: &BuildTarget) {
    print_banner(&format!("Building {}", target));
  }

  fn built(&mut self, target: &BuildTarget) {
    print_success(&format!("Built: {}", target.output_path()));
  }

  fn failed(&mut self, target: &BuildTarget, error: &BuildError) {
    print_error(&format!("Build of {} failed: {}", target.identifier, error));
  }

  fn finished(&mut self, targets: &[BuildTarget]) {
    println!();
    println!("All firmware built:");
    for target in targets {
      println!("  {}", target.output_path());
    }
  }
}

/// Reports a command-line error in a build invocation the same way as an unknown
/// target: the usage line on stderr and exit code 1. Help and version requests
/// are printed by clap as usual.
pub fn exit_with_usage(err: clap::Error, program: &str) -> ! {
  match err.kind() {
    ErrorKind::DisplayHelp
    | ErrorKind::DisplayVersion
    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
    _ => {
      eprintln!("{}", usage(program));
      std::process::exit(1)
    }
  }
}

/// Whether the arguments (without the program name) select the `build` subcommand.
///
/// Only the global `--root` option takes a value ahead of the subcommand.
pub fn is_build_invocation<I, S>(args: I) -> bool
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut args = args.into_iter();
  while let Some(arg) = args.next() {
    match arg.as_ref() {
      "--root" => {
        args.next();
      }
      flag if flag.starts_with('-') => {}
      subcommand => return subcommand == "build",
    }
  }
  false
}

/// Execute the build command and return the process exit code.
///
/// An unknown target prints the usage line and returns 1 without building anything.
/// A failed build returns the build tool's exit code.
pub fn cmd_build(program: &str, root: Option<PathBuf>, args: BuildArgs) -> Result<i32> {
  let selector = match Selector::from_arg(args.selector.as_deref()) {
    Ok(selector) => selector,
    Err(_) => {
      eprintln!("{}", usage(program));
      return Ok(1);
    }
  };

  let config = BuildConfig::resolve(root.as_deref(), args.board.as_deref())?.with_pristine(args.pristine);

  let policy = if args.keep_going {
    FailurePolicy::KeepGoing
  } else {
    FailurePolicy::FailFast
  };

  let rt = runtime()?;
  let report = rt.block_on(dispatch(selector, &config, &WestRunner, &mut TerminalReporter, policy));

  info!(
    built = report.built.len(),
    failed = report.failed.len(),
    skipped = report.skipped.len(),
    "build run complete"
  );

  if report.failed.len() > 1 {
    print_error(&format!(
      "{} of {} builds failed",
      report.failed.len(),
      selector.targets().len()
    ));
  }

  Ok(report.exit_code())
}
