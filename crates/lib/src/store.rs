//! The on-disk version store.
//!
//! Layout:
//! ```text
//! <root>/
//! ├── v2.1.0/spin           # one immutable binary per version
//! ├── canary/spin
//! ├── my-alias/spin         # alias symlink to an arbitrary local binary
//! └── current_version/spin  # symlink to the active version's binary
//! ```
//!
//! The root is always passed in explicitly so tests can point it at an
//! isolated temporary directory. [`Store::open_default`] resolves the
//! conventional location (`~/.spinver/versions`, overridable through the
//! `SPINVER_STORE` environment variable).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::version::VersionId;
use crate::{BINARY_NAME, CURRENT_VERSION_DIR, Result};

/// Environment variable overriding the default store root.
pub const STORE_ENV_VAR: &str = "SPINVER_STORE";

/// Outcome of removing a store entry.
///
/// Removing something that is not there is expected (not an error); callers
/// render it as an informational message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
  /// The entry existed and was deleted, under the returned directory name.
  Removed(String),
  /// Nothing to remove.
  Missing,
}

/// Handle to the version store root.
#[derive(Debug, Clone)]
pub struct Store {
  root: PathBuf,
}

impl Store {
  /// Create a store handle over an explicit root directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Resolve the conventional store location.
  ///
  /// `SPINVER_STORE` takes precedence; otherwise `~/.spinver/versions`.
  pub fn open_default() -> Result<Self> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR) {
      return Ok(Self::new(path));
    }

    let home = dirs::home_dir().ok_or_else(|| {
      std::io::Error::new(std::io::ErrorKind::NotFound, "could not determine the home directory")
    })?;
    Ok(Self::new(home.join(".spinver").join("versions")))
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Create the root directory if it does not exist yet.
  pub fn ensure_root(&self) -> Result<()> {
    if !self.root.exists() {
      fs::create_dir_all(&self.root)?;
      info!(root = %self.root.display(), "initialized version store");
    }
    Ok(())
  }

  /// Directory holding one version's binary.
  pub fn version_dir(&self, id: &VersionId) -> PathBuf {
    self.root.join(id.dir_name())
  }

  /// Absolute path of one version's binary.
  pub fn binary_path(&self, id: &VersionId) -> PathBuf {
    self.version_dir(id).join(BINARY_NAME)
  }

  /// Directory containing the active-version symlink.
  pub fn current_dir(&self) -> PathBuf {
    self.root.join(CURRENT_VERSION_DIR)
  }

  /// The active-version symlink path itself.
  pub fn current_link(&self) -> PathBuf {
    self.current_dir().join(BINARY_NAME)
  }

  /// Immediate children of the store root, excluding the active-pointer
  /// directory. Order is filesystem enumeration order.
  pub fn list(&self) -> Result<Vec<String>> {
    if !self.root.exists() {
      return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(&self.root)? {
      let entry = entry?;
      let name = entry.file_name().to_string_lossy().to_string();
      if name != CURRENT_VERSION_DIR {
        entries.push(name);
      }
    }
    Ok(entries)
  }

  /// Delete one store entry by name.
  ///
  /// The name is tried as given and then with a `v` prefix, so `1.2.3`
  /// removes the `v1.2.3` directory.
  pub fn remove(&self, name: &str) -> Result<RemoveOutcome> {
    let mut target = self.root.join(name);
    let mut dir_name = name.to_string();

    if !target.exists() {
      dir_name = format!("v{}", name);
      target = self.root.join(&dir_name);
      if !target.exists() {
        debug!(name, "nothing to remove");
        return Ok(RemoveOutcome::Missing);
      }
    }

    fs::remove_dir_all(&target)?;
    info!(entry = %dir_name, "removed store entry");
    Ok(RemoveOutcome::Removed(dir_name))
  }

  /// Delete every store entry, then the active-pointer directory.
  ///
  /// Returns the names of the entries that were actually deleted.
  pub fn remove_all(&self) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    for name in self.list()? {
      if let RemoveOutcome::Removed(dir_name) = self.remove(&name)? {
        removed.push(dir_name);
      }
    }

    // list() excludes current_version by construction
    self.remove(CURRENT_VERSION_DIR)?;
    Ok(removed)
  }
}
