pub const APP_NAME: &str = "offsetkey";

/// Overrides the workspace root (defaults to the current directory).
pub const ROOT_ENV: &str = "OFFSETKEY_ROOT";
/// Overrides the board passed to `west build -b`.
pub const BOARD_ENV: &str = "OFFSETKEY_BOARD";
/// Overrides the `west` executable.
pub const WEST_ENV: &str = "OFFSETKEY_WEST";
/// Overrides the `keymap` executable from keymap-drawer.
pub const KEYMAP_DRAWER_ENV: &str = "OFFSETKEY_KEYMAP_DRAWER";
/// Overrides the `git` executable.
pub const GIT_ENV: &str = "OFFSETKEY_GIT";

pub const DEFAULT_BOARD: &str = "eyelash_nano";
pub const DEFAULT_WEST: &str = "west";
pub const DEFAULT_KEYMAP_DRAWER: &str = "keymap";
pub const DEFAULT_GIT: &str = "git";

/// Location of the flashable image inside a build directory.
pub const FIRMWARE_SUBPATH: &str = "zephyr/zmk.uf2";
