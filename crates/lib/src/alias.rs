//! Named aliases to arbitrary local binaries.
//!
//! An alias is a symlink at `<root>/<name>/spin` pointing anywhere the user
//! likes, typically a locally built spin. Unlike activation, creating an
//! alias never executes the target. The alias named `custom` doubles as the
//! registration point for the `custom` sentinel version.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::store::Store;
use crate::{BINARY_NAME, Error, Result};

/// Bind `name` to the binary at `target`, replacing any previous binding.
///
/// Returns the path of the created link.
pub fn create_alias(store: &Store, name: &str, target: &Path) -> Result<PathBuf> {
  let alias_dir = store.root().join(name);
  fs::create_dir_all(&alias_dir)?;

  let link = alias_dir.join(BINARY_NAME);
  match fs::remove_file(&link) {
    Ok(()) => {}
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(source) => return Err(Error::RemoveLink { path: link, source }),
  }

  symlink(target, &link).map_err(|source| Error::CreateLink {
    link: link.clone(),
    target: target.to_path_buf(),
    source,
  })?;

  info!(alias = name, target = %target.display(), "created alias");
  Ok(link)
}
