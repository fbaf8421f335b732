use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use offsetkey_cli::cmd::{BuildArgs, cmd_build, exit_with_usage};
use offsetkey_cli::init_logging;

const PROGRAM: &str = "offsetkey-build";

/// Build Offsetkey firmware: left, right, dongle, or all (in that order)
#[derive(Parser)]
#[command(name = "offsetkey-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// ZMK config checkout (default: $OFFSETKEY_ROOT or the current directory)
  #[arg(long, value_name = "DIR")]
  root: Option<PathBuf>,

  #[command(flatten)]
  build: BuildArgs,
}

fn main() -> Result<()> {
  let cli = Cli::try_parse().unwrap_or_else(|err| exit_with_usage(err, PROGRAM));
  init_logging(cli.verbose);

  let code = cmd_build(PROGRAM, cli.root, cli.build)?;
  if code != 0 {
    std::process::exit(code);
  }
  Ok(())
}
