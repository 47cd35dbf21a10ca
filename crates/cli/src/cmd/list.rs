//! Implementation of the `spinver list` command.

use anyhow::Result;

use crate::output::{print_info, print_json};

/// Print all installed versions and aliases.
pub fn cmd_list(json: bool) -> Result<()> {
  let store = super::open_store()?;
  let entries = store.list()?;

  if json {
    print_json(&entries)?;
    return Ok(());
  }

  if entries.is_empty() {
    print_info("No versions of spin were found in the store. Run \"spinver get --help\" to get started");
    return Ok(());
  }

  for entry in entries {
    println!("{}", entry);
  }

  Ok(())
}
