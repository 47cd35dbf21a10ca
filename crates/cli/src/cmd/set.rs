//! Implementation of the `spinver set` command.

use anyhow::{Context, Result};

use spinver_lib::remote::Remote;
use spinver_lib::{activate, fetch, resolve};

use crate::output::print_success;

/// Resolve the requested version, make sure its binary exists locally, and
/// repoint the active-version symlink at it.
pub fn cmd_set(version: Option<String>) -> Result<()> {
  let args: Vec<String> = version.into_iter().collect();
  let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
  let requested = resolve::version_for_set(&args, &cwd)?;

  let store = super::open_store()?;
  let remote = Remote::default();
  let id = super::parse_version(&requested, &remote)?;

  fetch::ensure_version(&store, &remote, &id)
    .with_context(|| format!("Failed to retrieve spin {}", id))?;

  activate::activate(&store, &id).with_context(|| format!("Failed to activate spin {}", id))?;

  print_success(&format!("spin has been updated to version {}", id));
  Ok(())
}
