//! Build targets and the selector that picks them.
//!
//! Every firmware image the keyboard needs is listed once in [`TARGETS`]. Single
//! selectors look a target up by identifier, `all` walks the table in order, so the
//! two paths can never disagree about labels or ordering.

use std::fmt;
use std::slice;
use std::str::FromStr;

use thiserror::Error;

use crate::consts::FIRMWARE_SUBPATH;

/// A firmware image to build: a keyboard half or the dongle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildTarget {
  /// Short name used on the command line and in the build directory name.
  pub identifier: &'static str,
  /// Shield name handed to the firmware build unchanged.
  pub label: &'static str,
}

impl BuildTarget {
  /// Build directory relative to the workspace root (`build_<identifier>`).
  pub fn build_dir(&self) -> String {
    format!("build_{}", self.identifier)
  }

  /// Expected firmware artifact relative to the workspace root.
  pub fn output_path(&self) -> String {
    format!("{}/{}", self.build_dir(), FIRMWARE_SUBPATH)
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.identifier, self.label)
  }
}

/// All targets, in the order `all` builds them.
pub static TARGETS: [BuildTarget; 3] = [
  BuildTarget {
    identifier: "left",
    label: "offsetkey_peripheral_left",
  },
  BuildTarget {
    identifier: "right",
    label: "offsetkey_peripheral_right",
  },
  BuildTarget {
    identifier: "dongle",
    label: "offsetkey_central_dongle",
  },
];

const ALL: &str = "all";

/// Looks up a target by its identifier.
pub fn find_target(identifier: &str) -> Option<&'static BuildTarget> {
  TARGETS.iter().find(|t| t.identifier == identifier)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
  #[error("unknown build target '{0}'")]
  Unknown(String),
}

/// Which targets a single invocation builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
  #[default]
  All,
  One(&'static BuildTarget),
}

impl Selector {
  /// Parses an optional command-line argument; a missing argument means `all`.
  pub fn from_arg(arg: Option<&str>) -> Result<Self, SelectorError> {
    arg.map_or(Ok(Selector::All), str::parse::<Selector>)
  }

  pub fn is_all(&self) -> bool {
    matches!(self, Selector::All)
  }

  /// The targets to build, in build order.
  pub fn targets(&self) -> &'static [BuildTarget] {
    match self {
      Selector::All => &TARGETS,
      Selector::One(target) => slice::from_ref(*target),
    }
  }
}

impl FromStr for Selector {
  type Err = SelectorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s == ALL {
      return Ok(Selector::All);
    }
    find_target(s)
      .map(Selector::One)
      .ok_or_else(|| SelectorError::Unknown(s.to_string()))
  }
}

impl fmt::Display for Selector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Selector::All => f.write_str(ALL),
      Selector::One(target) => f.write_str(target.identifier),
    }
  }
}

/// One-line usage text, e.g. `Usage: offsetkey-build [left|right|dongle|all]`.
pub fn usage(program: &str) -> String {
  let choices: Vec<&str> = TARGETS.iter().map(|t| t.identifier).chain([ALL]).collect();
  format!("Usage: {} [{}]", program, choices.join("|"))
}
