//! Implementation of `offsetkey publish`.
//!
//! Commits every change in the config repository and pushes it. The push starts the
//! CI workflow that builds the firmware artifacts.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use offsetkey_lib::config::ManagerPaths;
use offsetkey_lib::git::{ChangeKind, FileChange, Git};

use super::runtime;
use crate::output::{print_info, print_stat, print_step, print_success, print_warning, symbols};
use crate::prompts::confirm;

fn change_symbol(change: &FileChange) -> &'static str {
  match change.kind() {
    ChangeKind::Added => symbols::ADD,
    ChangeKind::Modified => symbols::MODIFY,
    ChangeKind::Other => symbols::OTHER,
  }
}

fn print_change(change: &FileChange) {
  let symbol = change_symbol(change);
  let colored = match change.kind() {
    ChangeKind::Added => symbol.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
    ChangeKind::Modified => symbol.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
    ChangeKind::Other => symbol.if_supports_color(Stream::Stdout, |s| s.red()).to_string(),
  };
  println!("  {} {} {}", colored, change.status, change.path);
}

/// Commit all changes with `message` and push. `yes` skips the confirmation prompt.
pub fn cmd_publish(root: Option<&Path>, message: &str, yes: bool) -> Result<()> {
  let paths = ManagerPaths::resolve(root)?;
  let git = Git::new(&paths.git, &paths.root);

  let rt = runtime()?;
  rt.block_on(publish(&git, message, yes))
}

async fn publish(git: &Git, message: &str, yes: bool) -> Result<()> {
  let changes = git.status().await.context("Failed to read git status")?;

  if changes.is_empty() {
    print_warning("No changes to commit");
    return Ok(());
  }

  print_step("Changed files:");
  for change in &changes {
    print_change(change);
  }
  println!();

  if !confirm("Commit and push these changes?", yes)? {
    print_info("Cancelled");
    return Ok(());
  }

  print_step("Committing...");
  git.add_all().await.context("Failed to stage changes")?;
  git.commit(message).await.context("Failed to commit")?;

  print_step("Pushing...");
  git.push().await.context("Push failed")?;

  print_success("Pushed! GitHub Actions will build firmware.");
  print_stat("Download from", "Actions → latest run → firmware artifact");
  Ok(())
}
