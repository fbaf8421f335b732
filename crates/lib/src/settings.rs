//! Keyboard settings summary read from the Kconfig `.conf` fragment.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Parses `CONFIG_FOO=value` lines. Comments, blank lines and anything without `=`
/// are ignored; surrounding quotes are stripped from values. Later lines win.
pub fn parse_kconfig(content: &str) -> BTreeMap<String, String> {
  content
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'))
    .filter_map(|line| line.split_once('='))
    .map(|(key, value)| {
      let value = value.trim();
      let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
      (key.trim().to_string(), value.to_string())
    })
    .collect()
}

const SLEEP_TIMEOUT: &str = "CONFIG_ZMK_IDLE_SLEEP_TIMEOUT";
const IDLE_TIMEOUT: &str = "CONFIG_ZMK_IDLE_TIMEOUT";
const DISPLAY: &str = "CONFIG_ZMK_DISPLAY";
const RGB_UNDERGLOW: &str = "CONFIG_ZMK_RGB_UNDERGLOW";
const RGB_ON_START: &str = "CONFIG_ZMK_RGB_UNDERGLOW_ON_START";
const POINTING: &str = "CONFIG_ZMK_POINTING";
const DEBOUNCE_PRESS: &str = "CONFIG_ZMK_KSCAN_DEBOUNCE_PRESS_MS";
const DEBOUNCE_RELEASE: &str = "CONFIG_ZMK_KSCAN_DEBOUNCE_RELEASE_MS";
const TX_POWER_PLUS_8: &str = "TX_PWR_PLUS_8";

/// The settings worth showing, with ZMK's defaults filled in for anything unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
  pub sleep_timeout_min: u64,
  pub idle_timeout_sec: u64,
  pub display: String,
  pub rgb_underglow: String,
  pub rgb_on_start: String,
  pub pointing: String,
  pub debounce_press_ms: u64,
  pub debounce_release_ms: u64,
  pub bt_tx_power: String,
}

/// One line of the human-readable settings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
  pub label: &'static str,
  pub value: String,
  pub note: &'static str,
}

impl Settings {
  pub fn load(path: &Path) -> Result<Self, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(Self::from_kconfig(&content))
  }

  /// Numeric values are read from their leading digits; a value without any falls
  /// back to the default with a warning.
  pub fn from_kconfig(content: &str) -> Self {
    let values = parse_kconfig(content);

    let number = |key: &str, default: u64| -> u64 {
      let Some(value) = values.get(key) else {
        return default;
      };
      let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
      digits.parse().unwrap_or_else(|_| {
        warn!(key, value = %value, default, "ignoring non-numeric setting");
        default
      })
    };
    let flag = |key: &str| values.get(key).cloned().unwrap_or_else(|| "n".to_string());

    let boosted_tx = values
      .iter()
      .any(|(key, value)| key.ends_with(TX_POWER_PLUS_8) && value == "y");

    Self {
      sleep_timeout_min: number(SLEEP_TIMEOUT, 3_600_000) / 60_000,
      idle_timeout_sec: number(IDLE_TIMEOUT, 15_000) / 1000,
      display: flag(DISPLAY),
      rgb_underglow: flag(RGB_UNDERGLOW),
      rgb_on_start: flag(RGB_ON_START),
      pointing: flag(POINTING),
      debounce_press_ms: number(DEBOUNCE_PRESS, 5),
      debounce_release_ms: number(DEBOUNCE_RELEASE, 5),
      bt_tx_power: if boosted_tx { "+8 dBm" } else { "default" }.to_string(),
    }
  }

  pub fn rows(&self) -> Vec<SettingRow> {
    let row = |label, value: String, note| SettingRow { label, value, note };
    vec![
      row("Sleep timeout", format!("{} min", self.sleep_timeout_min), "Deep sleep"),
      row("Idle timeout", format!("{} sec", self.idle_timeout_sec), "Screen off"),
      row("Display", self.display.clone(), "OLED enabled"),
      row("RGB Underglow", self.rgb_underglow.clone(), "LED strip"),
      row("RGB on start", self.rgb_on_start.clone(), ""),
      row("Pointing device", self.pointing.clone(), "Trackpoint"),
      row("Debounce (press)", format!("{} ms", self.debounce_press_ms), ""),
      row("Debounce (release)", format!("{} ms", self.debounce_release_ms), ""),
      row("BT TX Power", self.bt_tx_power.clone(), "Range"),
    ]
  }
}
