use std::path::Path;

use anyhow::{Context, Result};

use offsetkey_lib::config::ManagerPaths;
use offsetkey_lib::git::{Git, actions_url};

use super::runtime;

/// Print the GitHub Actions page where CI firmware builds can be downloaded.
pub fn cmd_actions(root: Option<&Path>) -> Result<()> {
  let paths = ManagerPaths::resolve(root)?;
  let git = Git::new(&paths.git, &paths.root);

  let rt = runtime()?;
  let remote = rt
    .block_on(git.remote_url())
    .context("Failed to read the origin remote")?;

  println!("{}", actions_url(&remote));
  Ok(())
}
