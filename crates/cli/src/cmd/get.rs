//! Implementation of the `spinver get` command.

use anyhow::{Context, Result};

use spinver_lib::fetch::{self, Fetched};
use spinver_lib::remote::Remote;
use spinver_lib::resolve;

use crate::output::{print_info, print_success};

/// Download the requested versions if they are not already in the store.
pub fn cmd_get(versions: Vec<String>) -> Result<()> {
  let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
  let requested = resolve::versions_for_get(&versions, &cwd)?;

  let store = super::open_store()?;
  let remote = Remote::default();

  for raw in requested {
    let id = super::parse_version(&raw, &remote)?;
    let fetched = fetch::ensure_version(&store, &remote, &id)
      .with_context(|| format!("Failed to retrieve spin {}", id))?;

    match fetched {
      Fetched::Downloaded => print_success(&format!("spin {} was retrieved successfully", id)),
      Fetched::CacheHit => print_info(&format!("spin {} found locally", id)),
    }
  }

  Ok(())
}
