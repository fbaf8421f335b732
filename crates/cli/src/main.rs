use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use offsetkey_cli::cmd::{
  BuildArgs, cmd_actions, cmd_build, cmd_draw, cmd_publish, cmd_settings, cmd_targets, exit_with_usage,
  is_build_invocation,
};
use offsetkey_cli::init_logging;
use offsetkey_cli::output::OutputFormat;

const BUILD_PROGRAM: &str = "offsetkey build";

/// Offsetkey keyboard manager - firmware builds and ZMK config tooling
#[derive(Parser)]
#[command(name = "offsetkey")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// ZMK config checkout (default: $OFFSETKEY_ROOT or the current directory)
  #[arg(long, global = true, value_name = "DIR")]
  root: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build firmware for one half, the dongle, or all three
  Build(BuildArgs),

  /// List the firmware build targets
  Targets {
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Show keyboard settings from the .conf file
  Settings {
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Regenerate the keymap diagram (SVG)
  Draw,

  /// Commit and push config changes so CI builds the firmware
  Publish {
    /// Commit message
    #[arg(short, long, default_value = "Update keymap")]
    message: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
  },

  /// Print the GitHub Actions URL for firmware downloads
  Actions,
}

fn main() -> Result<()> {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) if is_build_invocation(std::env::args().skip(1)) => exit_with_usage(err, BUILD_PROGRAM),
    Err(err) => err.exit(),
  };
  init_logging(cli.verbose);

  let root = cli.root.as_deref();

  match cli.command {
    Commands::Build(args) => {
      let code = cmd_build(BUILD_PROGRAM, cli.root.clone(), args)?;
      if code != 0 {
        std::process::exit(code);
      }
      Ok(())
    }
    Commands::Targets { output } => cmd_targets(output),
    Commands::Settings { output } => cmd_settings(root, output),
    Commands::Draw => cmd_draw(root),
    Commands::Publish { message, yes } => cmd_publish(root, &message, yes),
    Commands::Actions => cmd_actions(root),
  }
}
