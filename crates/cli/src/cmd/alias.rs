//! Implementation of the `spinver alias` command.

use std::path::Path;

use anyhow::{Context, Result};

use spinver_lib::alias::create_alias;

use crate::output::print_success;

/// Bind a name to an arbitrary local spin binary.
pub fn cmd_alias(name: &str, path: &Path) -> Result<()> {
  let store = super::open_store()?;

  create_alias(&store, name, path).with_context(|| format!("Failed to create alias {:?}", name))?;

  print_success(&format!("Created alias {:?}", name));
  Ok(())
}
