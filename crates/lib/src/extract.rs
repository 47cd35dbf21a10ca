//! Archive extraction for downloaded spin releases.
//!
//! Release archives are gzipped tarballs containing the `spin` binary next to
//! license/readme files. Only the binary is extracted; it keeps the mode bits
//! recorded in the archive entry. The file is written to a scratch path in
//! the store root first and moved into its version directory once the scan is
//! done.
//!
//! If the archive holds no `spin` entry at all, the scan completes quietly
//! and the final move fails with a not-found error on the scratch path.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::store::Store;
use crate::version::VersionId;
use crate::{BINARY_NAME, Error, Result};

/// Pull the managed binary out of `archive_path` into the version directory
/// for `id`, preserving the archive entry's permission bits.
pub fn unpack_binary(archive_path: &Path, store: &Store, id: &VersionId) -> Result<()> {
  let file = File::open(archive_path)?;
  let decoder = GzDecoder::new(BufReader::new(file));
  let mut archive = Archive::new(decoder);

  // Extracted here before the move so a failed extraction never leaves a
  // half-written version directory behind.
  let scratch = store.root().join(BINARY_NAME);

  for entry in archive.entries()? {
    let mut entry = entry?;
    if !entry.header().entry_type().is_file() {
      continue;
    }
    if entry.path()?.as_ref() != Path::new(BINARY_NAME) {
      continue;
    }

    let mode = entry.header().mode()?;
    write_with_mode(&mut entry, &scratch, mode)?;

    // The process umask can strip bits at creation time
    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      fs::set_permissions(&scratch, fs::Permissions::from_mode(mode))?;
    }

    debug!(entry = BINARY_NAME, mode, "extracted binary entry");
  }

  let version_dir = store.version_dir(id);
  fs::create_dir_all(&version_dir)?;

  fs::rename(&scratch, version_dir.join(BINARY_NAME)).map_err(|source| Error::MoveBinary {
    path: scratch.clone(),
    source,
  })?;

  Ok(())
}

#[cfg(unix)]
fn write_with_mode(reader: &mut impl io::Read, dest: &Path, mode: u32) -> Result<()> {
  use std::fs::OpenOptions;
  use std::os::unix::fs::OpenOptionsExt;

  let mut out = OpenOptions::new()
    .create(true)
    .write(true)
    .truncate(true)
    .mode(mode)
    .open(dest)?;
  io::copy(reader, &mut out)?;
  Ok(())
}

#[cfg(not(unix))]
fn write_with_mode(reader: &mut impl io::Read, dest: &Path, _mode: u32) -> Result<()> {
  let mut out = File::create(dest)?;
  io::copy(reader, &mut out)?;
  Ok(())
}
