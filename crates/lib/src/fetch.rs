//! The ensure-present pipeline: cache check, download, extraction, cleanup.
//!
//! A version that is already in the store is a cache hit and is never
//! re-validated against upstream; refreshing a stale entry requires removing
//! it first (`update canary` does exactly that).

use std::fs::{self, File};
use std::io;

use tracing::{debug, info};

use crate::platform::Platform;
use crate::remote::Remote;
use crate::store::Store;
use crate::version::VersionId;
use crate::{Error, Result, extract};

/// How `ensure_version` satisfied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetched {
  /// The archive was downloaded and unpacked.
  Downloaded,
  /// The version directory already existed; nothing was done.
  CacheHit,
}

/// Guarantee that the binary for `id` exists in the store.
///
/// `Custom` is never downloaded: it must have been registered through the
/// alias machinery beforehand. Tagged and canary versions are downloaded from
/// the release archive URL on a cache miss and unpacked into the store; the
/// temporary archive file is deleted once extraction succeeds.
pub fn ensure_version(store: &Store, remote: &Remote, id: &VersionId) -> Result<Fetched> {
  if let VersionId::Custom = id {
    if store.binary_path(id).exists() {
      return Ok(Fetched::CacheHit);
    }
    return Err(Error::CustomNotRegistered);
  }

  // Unsupported hosts fail up front, before any store or network access
  let platform = Platform::detect()?;

  if store.version_dir(id).exists() {
    info!(version = %id, "version found locally");
    return Ok(Fetched::CacheHit);
  }

  let tag = id.dir_name();
  let asset = platform.asset_name(&tag);

  store.ensure_root()?;

  let url = remote.download_url(&tag, &asset);
  info!(version = %id, url, "version not found locally, retrieving from source");

  let mut response = crate::remote::client()?.get(&url).send()?;
  if !response.status().is_success() {
    return Err(Error::ReleaseNotFound { version: tag });
  }

  // Stream the body straight to a transient archive file in the store root
  let archive_path = store.root().join(&asset);
  let mut out = File::create(&archive_path)?;
  io::copy(&mut response, &mut out)?;
  drop(out);

  extract::unpack_binary(&archive_path, store, id)?;

  fs::remove_file(&archive_path)?;
  debug!(archive = %archive_path.display(), "removed transient archive");

  info!(version = %id, "version retrieved successfully");
  Ok(Fetched::Downloaded)
}
