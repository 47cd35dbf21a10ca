//! Implementation of the `spinver list-remote` command.

use anyhow::{Context, Result};

use spinver_lib::remote::Remote;

use crate::output::print_info;

/// Print every version published upstream, newest first.
pub fn cmd_list_remote() -> Result<()> {
  print_info("Fetching available spin releases ...");

  let remote = Remote::default();
  let releases = remote.releases().context("Failed to load available spin releases")?;

  for release in releases {
    // Tags are printed without the `v` prefix, matching what users type
    println!("{}", release.tag_name.trim_start_matches('v'));
  }

  Ok(())
}
