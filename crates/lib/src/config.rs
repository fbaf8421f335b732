//! Workspace configuration.
//!
//! Everything the dispatcher and the manager commands need to know about the
//! surrounding checkout is resolved once, at startup, into [`BuildConfig`] and
//! [`ManagerPaths`]. Nothing downstream reads the process environment or the
//! current directory.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::{
  APP_NAME, BOARD_ENV, DEFAULT_BOARD, DEFAULT_GIT, DEFAULT_KEYMAP_DRAWER, DEFAULT_WEST, GIT_ENV, KEYMAP_DRAWER_ENV,
  ROOT_ENV, WEST_ENV,
};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("workspace root {} is not accessible: {source}", path.display())]
  Root {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("could not determine the current directory: {0}")]
  CurrentDir(#[source] io::Error),
}

/// Resolves the workspace root: explicit override, then `OFFSETKEY_ROOT`, then the
/// current directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, ConfigError> {
  let candidate = match root {
    Some(path) => path.to_path_buf(),
    None => match std::env::var_os(ROOT_ENV) {
      Some(path) if !path.is_empty() => PathBuf::from(path),
      _ => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
    },
  };

  dunce::canonicalize(&candidate).map_err(|source| ConfigError::Root {
    path: candidate,
    source,
  })
}

/// Returns the executable named by `var`, or `default` when it is unset or empty.
pub fn tool_from_env(var: &str, default: &str) -> PathBuf {
  match std::env::var_os(var) {
    Some(value) if !value.is_empty() => PathBuf::from(value),
    _ => PathBuf::from(default),
  }
}

/// Inputs for one firmware build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  /// Workspace root; build directories are created here.
  pub root: PathBuf,
  /// ZMK application directory passed as the build source.
  pub toolchain_dir: PathBuf,
  /// Directory holding the keymap and Kconfig fragments.
  pub config_dir: PathBuf,
  /// Extra Zephyr module providing the shields.
  pub modules_dir: PathBuf,
  pub board: String,
  /// The `west` executable.
  pub west: PathBuf,
  /// Wipe the build directory before building.
  pub pristine: bool,
}

impl BuildConfig {
  /// Derives every path from `root` and uses the default board and tool.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    Self {
      toolchain_dir: root.join("zmk").join("app"),
      config_dir: root.join("config"),
      modules_dir: root.clone(),
      root,
      board: DEFAULT_BOARD.to_string(),
      west: PathBuf::from(DEFAULT_WEST),
      pristine: false,
    }
  }

  /// Builds the configuration from command-line overrides and the environment.
  ///
  /// Precedence for each setting: explicit argument, environment variable, default.
  pub fn resolve(root: Option<&Path>, board: Option<&str>) -> Result<Self, ConfigError> {
    let root = resolve_root(root)?;

    let board = match board {
      Some(board) => board.to_string(),
      None => std::env::var(BOARD_ENV)
        .ok()
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BOARD.to_string()),
    };

    let config = Self::new(root)
      .with_board(board)
      .with_west(tool_from_env(WEST_ENV, DEFAULT_WEST));

    debug!(
      root = %config.root.display(),
      board = %config.board,
      west = %config.west.display(),
      "resolved build config"
    );
    Ok(config)
  }

  pub fn with_board(mut self, board: impl Into<String>) -> Self {
    self.board = board.into();
    self
  }

  pub fn with_west(mut self, west: impl Into<PathBuf>) -> Self {
    self.west = west.into();
    self
  }

  pub fn with_pristine(mut self, pristine: bool) -> Self {
    self.pristine = pristine;
    self
  }
}

/// File locations used by the manager commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerPaths {
  pub root: PathBuf,
  pub keymap: PathBuf,
  pub conf: PathBuf,
  pub drawer_config: PathBuf,
  pub physical_layout: PathBuf,
  pub diagram_yaml: PathBuf,
  pub diagram_svg: PathBuf,
  /// The `keymap` executable from keymap-drawer.
  pub keymap_drawer: PathBuf,
  pub git: PathBuf,
}

impl ManagerPaths {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    let config_dir = root.join("config");
    let diagram_dir = root.join("keymap-drawer");
    Self {
      keymap: config_dir.join(format!("{APP_NAME}.keymap")),
      conf: config_dir.join(format!("{APP_NAME}.conf")),
      drawer_config: root.join("keymap_drawer.config.yaml"),
      physical_layout: root
        .join("boards")
        .join("shields")
        .join(APP_NAME)
        .join(format!("{APP_NAME}_physical_layout.dtsi")),
      diagram_yaml: diagram_dir.join(format!("{APP_NAME}.yaml")),
      diagram_svg: diagram_dir.join(format!("{APP_NAME}.svg")),
      keymap_drawer: PathBuf::from(DEFAULT_KEYMAP_DRAWER),
      git: PathBuf::from(DEFAULT_GIT),
      root,
    }
  }

  /// Resolves the root like [`BuildConfig::resolve`] and picks up tool overrides.
  pub fn resolve(root: Option<&Path>) -> Result<Self, ConfigError> {
    let mut paths = Self::new(resolve_root(root)?);
    paths.keymap_drawer = tool_from_env(KEYMAP_DRAWER_ENV, DEFAULT_KEYMAP_DRAWER);
    paths.git = tool_from_env(GIT_ENV, DEFAULT_GIT);
    Ok(paths)
  }

  /// `path` relative to the workspace root, for display.
  pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
    path.strip_prefix(&self.root).unwrap_or(path)
  }
}
