//! Git plumbing for publishing config changes.
//!
//! Pushing to the remote is what triggers the CI firmware build, so the manager only
//! needs status, commit, push and the remote URL.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GitError {
  #[error("failed to run {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  #[error("git {args} failed with exit code {code:?}: {stderr}")]
  Failed {
    args: String,
    code: Option<i32>,
    stderr: String,
  },

  #[error("no remote named 'origin' is configured")]
  NoRemote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
  Added,
  Modified,
  Other,
}

/// One entry of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
  /// The two-letter XY status code.
  pub status: String,
  pub path: String,
}

impl FileChange {
  pub fn kind(&self) -> ChangeKind {
    if self.status.contains('A') {
      ChangeKind::Added
    } else if self.status.contains('M') {
      ChangeKind::Modified
    } else {
      ChangeKind::Other
    }
  }
}

/// Parses porcelain v1 output (`XY path`).
pub fn parse_porcelain(output: &str) -> Vec<FileChange> {
  output
    .lines()
    .filter(|line| line.len() > 3)
    .map(|line| FileChange {
      status: line[..2].to_string(),
      path: line[3..].to_string(),
    })
    .collect()
}

/// Converts a remote URL into the repository's GitHub Actions page.
///
/// `git@github.com:user/repo.git` becomes `https://github.com/user/repo/actions`;
/// HTTPS remotes only lose their `.git` suffix.
pub fn actions_url(remote: &str) -> String {
  let remote = remote.trim().trim_end_matches('/');
  let base = match remote.strip_prefix("git@github.com:") {
    Some(path) => format!("https://github.com/{}", path.strip_suffix(".git").unwrap_or(path)),
    None => remote.strip_suffix(".git").unwrap_or(remote).to_string(),
  };
  format!("{}/actions", base)
}

/// A git executable bound to one repository.
#[derive(Debug, Clone)]
pub struct Git {
  program: PathBuf,
  repo: PathBuf,
}

impl Git {
  pub fn new(program: impl Into<PathBuf>, repo: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      repo: repo.into(),
    }
  }

  async fn run(&self, args: &[&str]) -> Result<String, GitError> {
    debug!(?args, repo = %self.repo.display(), "running git");

    let output = Command::new(&self.program)
      .args(args)
      .current_dir(&self.repo)
      .output()
      .await
      .map_err(|source| GitError::Spawn {
        program: self.program.display().to_string(),
        source,
      })?;

    if !output.status.success() {
      return Err(GitError::Failed {
        args: args.join(" "),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }

  /// Uncommitted changes, including untracked files.
  pub async fn status(&self) -> Result<Vec<FileChange>, GitError> {
    let output = self.run(&["status", "--porcelain"]).await?;
    Ok(parse_porcelain(&output))
  }

  pub async fn add_all(&self) -> Result<(), GitError> {
    self.run(&["add", "-A"]).await.map(drop)
  }

  pub async fn commit(&self, message: &str) -> Result<(), GitError> {
    self.run(&["commit", "-m", message]).await.map(drop)
  }

  pub async fn push(&self) -> Result<(), GitError> {
    self.run(&["push"]).await.map(drop)
  }

  pub async fn remote_url(&self) -> Result<String, GitError> {
    match self.run(&["config", "--get", "remote.origin.url"]).await {
      Ok(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
      // `git config --get` exits 1 when the key is missing.
      Ok(_) | Err(GitError::Failed { code: Some(1), .. }) => Err(GitError::NoRemote),
      Err(err) => Err(err),
    }
  }
}
