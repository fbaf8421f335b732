//! Manager subcommands: settings, draw, publish, actions, targets.

use predicates::prelude::*;

use super::common::TestEnv;

const CONF: &str = "\
CONFIG_ZMK_IDLE_SLEEP_TIMEOUT=900000
CONFIG_ZMK_DISPLAY=y
CONFIG_ZMK_POINTING=y
CONFIG_BT_CTLR_TX_PWR_PLUS_8=y
";

#[test]
fn settings_shows_converted_values() {
  let env = TestEnv::new();
  env.write_file("config/offsetkey.conf", CONF);

  env
    .offsetkey_cmd()
    .arg("settings")
    .assert()
    .success()
    .stdout(predicate::str::contains("Sleep timeout: 15 min (Deep sleep)"))
    .stdout(predicate::str::contains("Idle timeout: 15 sec"))
    .stdout(predicate::str::contains("BT TX Power: +8 dBm"));
}

#[test]
fn settings_as_json() {
  let env = TestEnv::new();
  env.write_file("config/offsetkey.conf", CONF);

  let output = env
    .offsetkey_cmd()
    .args(["settings", "--output", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(json["sleep_timeout_min"], 15);
  assert_eq!(json["display"], "y");
  assert_eq!(json["rgb_underglow"], "n");
}

#[test]
fn settings_without_conf_fails() {
  let env = TestEnv::new();

  env
    .offsetkey_cmd()
    .arg("settings")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read keyboard settings"));
}

#[test]
fn draw_writes_svg() {
  let env = TestEnv::new();
  env.write_file("config/offsetkey.keymap", "/ { keymap { }; };");
  env.fake_tool(
    "keymap",
    "case \"$3\" in\n  parse) echo 'layers: {}' ;;\n  draw) echo '<svg/>' ;;\nesac",
  );

  env
    .offsetkey_cmd()
    .arg("draw")
    .assert()
    .success()
    .stdout(predicate::str::contains("Saved to keymap-drawer/offsetkey.svg"));

  let svg = std::fs::read_to_string(env.temp.path().join("keymap-drawer/offsetkey.svg")).unwrap();
  assert_eq!(svg, "<svg/>\n");
  assert_eq!(env.log("keymap").len(), 2);
}

#[test]
fn draw_without_keymap_drawer_suggests_install() {
  let env = TestEnv::new();

  env
    .offsetkey_cmd()
    .arg("draw")
    .assert()
    .failure()
    .stderr(predicate::str::contains("pipx install keymap-drawer"));
}

#[test]
fn publish_with_clean_tree_does_nothing() {
  let env = TestEnv::new();
  env.fake_tool("git", "");

  env
    .offsetkey_cmd()
    .args(["publish", "--yes"])
    .assert()
    .success()
    .stderr(predicate::str::contains("No changes to commit"));

  assert_eq!(env.log("git"), ["status --porcelain"]);
}

#[test]
fn publish_commits_and_pushes() {
  let env = TestEnv::new();
  env.fake_tool(
    "git",
    "if [ \"$1\" = status ]; then printf ' M config/offsetkey.keymap\\n'; fi",
  );

  env
    .offsetkey_cmd()
    .args(["publish", "--yes", "--message", "Tweak combos"])
    .assert()
    .success()
    .stdout(predicate::str::contains("M config/offsetkey.keymap"))
    .stdout(predicate::str::contains("Pushed!"));

  assert_eq!(
    env.log("git"),
    ["status --porcelain", "add -A", "commit -m Tweak combos", "push"]
  );
}

#[test]
fn publish_refuses_to_prompt_without_terminal() {
  let env = TestEnv::new();
  env.fake_tool(
    "git",
    "if [ \"$1\" = status ]; then printf '?? notes.txt\\n'; fi",
  );

  env
    .offsetkey_cmd()
    .arg("publish")
    .assert()
    .failure()
    .stderr(predicate::str::contains("non-interactive"));

  assert_eq!(env.log("git"), ["status --porcelain"]);
}

#[test]
fn failed_push_is_reported() {
  let env = TestEnv::new();
  env.fake_tool(
    "git",
    "case \"$1\" in\n  status) printf 'A  docs/zmk-reference.md\\n' ;;\n  push) echo 'rejected' >&2; exit 1 ;;\nesac",
  );

  env
    .offsetkey_cmd()
    .args(["publish", "-y"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Push failed"));
}

#[test]
fn actions_prints_github_url() {
  let env = TestEnv::new();
  env.fake_tool("git", "echo 'git@github.com:someone/zmk-config.git'");

  env
    .offsetkey_cmd()
    .arg("actions")
    .assert()
    .success()
    .stdout("https://github.com/someone/zmk-config/actions\n");
}

#[test]
fn actions_without_remote_fails() {
  let env = TestEnv::new();
  env.fake_tool("git", "exit 1");

  env
    .offsetkey_cmd()
    .arg("actions")
    .assert()
    .failure()
    .stderr(predicate::str::contains("no remote named 'origin'"));
}

#[test]
fn targets_lists_the_build_table() {
  let env = TestEnv::new();

  let output = env
    .offsetkey_cmd()
    .args(["targets", "-o", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
  let ids: Vec<_> = json.as_array().unwrap().iter().map(|t| t["identifier"].as_str().unwrap()).collect();
  assert_eq!(ids, ["left", "right", "dongle"]);
  assert_eq!(json[2]["label"], "offsetkey_central_dongle");
  assert_eq!(json[0]["build_dir"], "build_left");
}
