use anyhow::Result;
use serde_json::json;

use offsetkey_lib::firmware::TARGETS;

use crate::output::{OutputFormat, print_json};

/// List the build targets with their shields and artifact paths.
pub fn cmd_targets(output: OutputFormat) -> Result<()> {
  if output.is_json() {
    let items: Vec<_> = TARGETS
      .iter()
      .map(|t| {
        json!({
          "identifier": t.identifier,
          "label": t.label,
          "build_dir": t.build_dir(),
          "output": t.output_path(),
        })
      })
      .collect();
    return print_json(&items);
  }

  for target in &TARGETS {
    println!("{:<8} {:<28} {}", target.identifier, target.label, target.output_path());
  }
  Ok(())
}
