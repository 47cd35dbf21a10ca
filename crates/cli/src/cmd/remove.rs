//! Implementation of the `spinver remove` command.

use anyhow::Result;

use spinver_lib::CURRENT_VERSION_DIR;
use spinver_lib::store::RemoveOutcome;

use crate::output::{print_info, print_success, print_warning};
use crate::prompts::confirm;

/// Remove one store entry, the active pointer (`current`), or everything
/// (`all`, behind a confirmation prompt).
pub fn cmd_remove(target: &str, yes: bool) -> Result<()> {
  let store = super::open_store()?;

  match target {
    "all" => {
      if !confirm("Are you sure you want to delete all spin versions?", yes)? {
        print_info("No spin versions were deleted");
        return Ok(());
      }

      store.remove_all()?;
      print_success("All spin versions successfully deleted");
    }
    "current" => {
      match store.remove(CURRENT_VERSION_DIR)? {
        RemoveOutcome::Removed(_) => print_success("Removed the active version pointer"),
        RemoveOutcome::Missing => print_info("No active version pointer; nothing to remove"),
      }
    }
    version => match store.remove(version)? {
      RemoveOutcome::Removed(name) => print_success(&format!("Removed {}", name)),
      RemoveOutcome::Missing => print_warning("file does not exist; nothing to remove"),
    },
  }

  Ok(())
}
