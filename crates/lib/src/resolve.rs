//! Version resolution from explicit arguments and the `.spinrc` marker file.
//!
//! Explicit arguments always win. With no arguments, the trimmed content of
//! `.spinrc` in the working directory is the fallback; if that is missing or
//! empty the resolution fails rather than defaulting silently.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, RC_FILE_NAME, Result};

/// Resolve the single version a `set` operation should act on.
pub fn version_for_set(args: &[String], dir: &Path) -> Result<String> {
  if let Some(version) = args.first() {
    return Ok(version.clone());
  }

  rc_file_version(dir).ok_or(Error::VersionRequired)
}

/// Resolve the set of versions a `get` operation should act on.
pub fn versions_for_get(args: &[String], dir: &Path) -> Result<Vec<String>> {
  if !args.is_empty() {
    return Ok(args.to_vec());
  }

  match rc_file_version(dir) {
    Some(version) => Ok(vec![version]),
    None => Err(Error::VersionRequired),
  }
}

/// Read the marker file, returning its trimmed content if non-empty.
///
/// An absent or unreadable file means "no fallback", never an error.
fn rc_file_version(dir: &Path) -> Option<String> {
  let path = dir.join(RC_FILE_NAME);
  let content = fs::read_to_string(&path).ok()?;
  let trimmed = content.trim();
  if trimmed.is_empty() {
    return None;
  }

  debug!(path = %path.display(), version = trimmed, "using version from marker file");
  Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn explicit_argument_wins_over_marker_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(RC_FILE_NAME), "9.9.9\n").unwrap();

    let version = version_for_set(&args(&["2.0.0"]), temp.path()).unwrap();
    assert_eq!(version, "2.0.0");
  }

  #[test]
  fn marker_file_is_the_fallback() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(RC_FILE_NAME), "  1.4.1\n").unwrap();

    assert_eq!(version_for_set(&[], temp.path()).unwrap(), "1.4.1");
    assert_eq!(versions_for_get(&[], temp.path()).unwrap(), vec!["1.4.1"]);
  }

  #[test]
  fn missing_marker_file_fails() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(version_for_set(&[], temp.path()), Err(Error::VersionRequired)));
    assert!(matches!(versions_for_get(&[], temp.path()), Err(Error::VersionRequired)));
  }

  #[test]
  fn empty_marker_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(RC_FILE_NAME), "   \n").unwrap();
    assert!(matches!(version_for_set(&[], temp.path()), Err(Error::VersionRequired)));
  }

  #[test]
  fn get_keeps_all_explicit_arguments() {
    let temp = TempDir::new().unwrap();
    let versions = versions_for_get(&args(&["2.1.0", "canary"]), temp.path()).unwrap();
    assert_eq!(versions, vec!["2.1.0", "canary"]);
  }
}
