//! offsetkey-lib: firmware builds and config tooling for the Offsetkey keyboard.
//!
//! - `firmware`: the build target table and the sequential `west` dispatcher
//! - `config`: workspace paths, board and tool overrides resolved at startup
//! - `settings`: summary of the Kconfig `.conf` fragment
//! - `drawer`: keymap diagram regeneration via keymap-drawer
//! - `git`: publishing config changes and locating the CI firmware artifacts

pub mod config;
pub mod consts;
pub mod drawer;
pub mod firmware;
pub mod git;
pub mod settings;
pub mod util;
