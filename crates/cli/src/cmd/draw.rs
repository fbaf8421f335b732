//! Implementation of `offsetkey draw`.

use std::path::Path;

use anyhow::{Context, Result};

use offsetkey_lib::config::ManagerPaths;
use offsetkey_lib::drawer;

use super::runtime;
use crate::output::{print_step, print_success};

/// Regenerate `keymap-drawer/offsetkey.svg` from the keymap.
pub fn cmd_draw(root: Option<&Path>) -> Result<()> {
  let paths = ManagerPaths::resolve(root)?;

  print_step("Regenerating keymap diagram...");

  let rt = runtime()?;
  let outputs = rt
    .block_on(drawer::regenerate(&paths))
    .context("Failed to regenerate keymap diagram")?;

  print_success(&format!("Saved to {}", paths.relative(&outputs.svg).display()));
  Ok(())
}
