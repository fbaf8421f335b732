//! Implementation of `offsetkey settings`.

use std::path::Path;

use anyhow::{Context, Result};

use offsetkey_lib::config::ManagerPaths;
use offsetkey_lib::settings::Settings;

use crate::output::{OutputFormat, print_json, print_stat, print_step};

/// Show the keyboard settings from `config/offsetkey.conf`.
pub fn cmd_settings(root: Option<&Path>, output: OutputFormat) -> Result<()> {
  let paths = ManagerPaths::resolve(root)?;
  let settings = Settings::load(&paths.conf).context("Failed to read keyboard settings")?;

  if output.is_json() {
    return print_json(&settings);
  }

  print_step(&format!("Reading {}", paths.relative(&paths.conf).display()));
  println!();
  println!("Keyboard Settings");
  for row in settings.rows() {
    let value = if row.note.is_empty() {
      row.value
    } else {
      format!("{} ({})", row.value, row.note)
    };
    print_stat(row.label, &value);
  }

  Ok(())
}
