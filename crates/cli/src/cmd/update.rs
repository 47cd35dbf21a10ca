//! Implementation of the `spinver update canary` command.
//!
//! Canary is the only mutable release tag, so "update" means: drop the local
//! copy, then run the normal ensure-present pipeline again.

use anyhow::{Context, Result};

use spinver_lib::VersionId;
use spinver_lib::fetch;
use spinver_lib::remote::Remote;
use spinver_lib::store::RemoveOutcome;

use crate::output::{print_info, print_success};

/// Replace the locally cached canary build with a fresh download.
pub fn cmd_update_canary() -> Result<()> {
  let store = super::open_store()?;

  if let RemoveOutcome::Removed(_) = store.remove("canary")? {
    print_info("Old canary version successfully deleted");
  }

  let remote = Remote::default();
  fetch::ensure_version(&store, &remote, &VersionId::Canary).context("Failed to retrieve the canary build")?;

  print_success("spin canary was retrieved successfully");
  Ok(())
}
