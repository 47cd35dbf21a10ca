//! Active-version switching.
//!
//! The active version is exposed through a single symlink at
//! `<root>/current_version/spin`, which the user is expected to have
//! prepended to `PATH`. Switching is remove-then-create (not atomic; fine for
//! a single-user tool) followed by a verification run of `spin --version`
//! through `PATH`, which catches the case where the link is correct on disk
//! but shadowed by another installed copy.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::store::Store;
use crate::version::VersionId;
use crate::{BINARY_NAME, Error, Result};

/// Repoint the active-version symlink at `id`'s binary and verify the switch
/// took effect.
pub fn activate(store: &Store, id: &VersionId) -> Result<()> {
  let current_dir = store.current_dir();
  fs::create_dir_all(&current_dir)?;

  let link = store.current_link();
  match fs::remove_file(&link) {
    Ok(()) => {}
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(source) => return Err(Error::RemoveLink { path: link, source }),
  }

  let target = store.binary_path(id);
  symlink(&target, &link).map_err(|source| Error::CreateLink {
    link: link.clone(),
    target: target.clone(),
    source,
  })?;

  info!(version = %id, link = %link.display(), "switched active version");
  verify(store, id, &current_dir)
}

/// Run the PATH-resolved binary and check it reports the expected version.
///
/// Tagged versions are compared against their bare semver string. Sentinels
/// have no known tag, so the binary inside the version directory is asked for
/// its own version first and the PATH-resolved output must match that.
fn verify(store: &Store, id: &VersionId, link_dir: &Path) -> Result<()> {
  let reported = combined_output(Command::new(BINARY_NAME).arg("--version"))?;

  let expected = match id.bare() {
    Some(version) => version,
    None => self_reported_version(&store.binary_path(id))?,
  };

  if !reported.contains(&expected) {
    return Err(Error::ActivationMismatch {
      link_dir: link_dir.to_path_buf(),
    });
  }

  debug!(version = %expected, "active version verified");
  Ok(())
}

/// Ask a binary for its version and return the version token, i.e. the second
/// whitespace-separated word of output like `spin 2.1.0 (a1b2c3 2023-11-02)`.
fn self_reported_version(binary: &Path) -> Result<String> {
  let output = combined_output(Command::new(binary).arg("--version"))?;
  output
    .split_whitespace()
    .nth(1)
    .map(str::to_string)
    .ok_or_else(|| Error::VersionProbe {
      command: format!("{} --version", binary.display()),
      message: format!("unexpected version output {output:?}"),
    })
}

/// Run a command and return stdout and stderr concatenated.
fn combined_output(command: &mut Command) -> Result<String> {
  let description = format!("{} --version", command.get_program().to_string_lossy());

  let output = command.output().map_err(|e| Error::VersionProbe {
    command: description.clone(),
    message: e.to_string(),
  })?;

  let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
  combined.push_str(&String::from_utf8_lossy(&output.stderr));

  if !output.status.success() {
    return Err(Error::VersionProbe {
      command: description,
      message: combined,
    });
  }

  Ok(combined)
}
