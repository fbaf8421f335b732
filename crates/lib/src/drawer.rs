//! Keymap diagram regeneration through keymap-drawer.
//!
//! Two steps: `keymap parse` turns the ZMK keymap into keymap-drawer YAML, then
//! `keymap draw` renders that YAML to SVG. Both write to stdout, which is saved
//! under `keymap-drawer/`.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Output;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::ManagerPaths;

#[derive(Debug, Error)]
pub enum DrawError {
  #[error("'{tool}' command not found. Install with: pipx install keymap-drawer")]
  NotFound { tool: String },

  #[error("parse error: {stderr}")]
  Parse { stderr: String },

  #[error("draw error: {stderr}")]
  Draw { stderr: String },

  #[error("io error: {0}")]
  Io(#[from] io::Error),
}

/// Files written by a successful [`regenerate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutputs {
  pub yaml: PathBuf,
  pub svg: PathBuf,
}

/// Arguments for `keymap parse`. The `-c` config flag is global and goes before
/// the subcommand.
pub fn parse_args(paths: &ManagerPaths) -> Vec<PathBuf> {
  vec![
    "-c".into(),
    paths.drawer_config.clone(),
    "parse".into(),
    "-z".into(),
    paths.keymap.clone(),
  ]
}

/// Arguments for `keymap draw`, adding the physical layout when the shield ships one.
pub fn draw_args(paths: &ManagerPaths) -> Vec<PathBuf> {
  let mut args = vec!["-c".into(), paths.drawer_config.clone(), "draw".into()];
  if paths.physical_layout.exists() {
    args.push("-d".into());
    args.push(paths.physical_layout.clone());
  }
  args.push(paths.diagram_yaml.clone());
  args
}

async fn run(tool: &Path, args: &[PathBuf], root: &Path) -> Result<Output, DrawError> {
  debug!(tool = %tool.display(), ?args, "running keymap-drawer");

  Command::new(tool)
    .args(args)
    .current_dir(root)
    .output()
    .await
    .map_err(|err| match err.kind() {
      io::ErrorKind::NotFound => DrawError::NotFound {
        tool: tool.display().to_string(),
      },
      _ => DrawError::Io(err),
    })
}

/// Parses the keymap and draws the SVG, replacing any previous outputs.
pub async fn regenerate(paths: &ManagerPaths) -> Result<DrawOutputs, DrawError> {
  let tool = &paths.keymap_drawer;

  info!(keymap = %paths.keymap.display(), "parsing keymap");
  let parsed = run(tool, &parse_args(paths), &paths.root).await?;
  if !parsed.status.success() {
    return Err(DrawError::Parse {
      stderr: String::from_utf8_lossy(&parsed.stderr).trim().to_string(),
    });
  }

  if let Some(dir) = paths.diagram_yaml.parent() {
    tokio::fs::create_dir_all(dir).await?;
  }
  tokio::fs::write(&paths.diagram_yaml, &parsed.stdout).await?;

  info!(yaml = %paths.diagram_yaml.display(), "drawing svg");
  let drawn = run(tool, &draw_args(paths), &paths.root).await?;
  if !drawn.status.success() {
    return Err(DrawError::Draw {
      stderr: String::from_utf8_lossy(&drawn.stderr).trim().to_string(),
    });
  }

  tokio::fs::write(&paths.diagram_svg, &drawn.stdout).await?;
  info!(svg = %paths.diagram_svg.display(), "diagram written");

  Ok(DrawOutputs {
    yaml: paths.diagram_yaml.clone(),
    svg: paths.diagram_svg.clone(),
  })
}
