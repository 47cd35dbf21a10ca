//! Version identifiers for managed spin binaries.
//!
//! A [`VersionId`] is either a tagged release (`v2.1.0`), the `canary`
//! sentinel (latest unstable build), or the `custom` sentinel (a local binary
//! registered through the alias machinery). Parsing accepts both prefixed and
//! unprefixed semver input; the canonical form always carries the `v` prefix.

use std::fmt;

use semver::Version;

use crate::{Error, Result};

/// Identity of one managed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionId {
  /// A released version, stored under its `v`-prefixed tag.
  Tagged(Version),
  /// The latest unstable build, re-downloadable under the `canary` tag.
  Canary,
  /// A user-supplied local binary, never downloaded.
  Custom,
}

impl VersionId {
  /// Parse user input into a version identity.
  ///
  /// Accepts `1.2.3`, `v1.2.3`, `canary`, and `custom`. Anything else is an
  /// input error.
  pub fn parse(input: &str) -> Result<Self> {
    match input {
      "canary" => Ok(Self::Canary),
      "custom" => Ok(Self::Custom),
      _ => {
        let bare = input.strip_prefix('v').unwrap_or(input);
        let version = Version::parse(bare).map_err(|_| Error::InvalidVersion(input.to_string()))?;
        Ok(Self::Tagged(version))
      }
    }
  }

  /// Directory name under the store root, which is also the release tag.
  pub fn dir_name(&self) -> String {
    match self {
      Self::Tagged(version) => format!("v{}", version),
      Self::Canary => "canary".to_string(),
      Self::Custom => "custom".to_string(),
    }
  }

  /// The version string without the `v` prefix, as reported by `spin --version`.
  ///
  /// Only meaningful for tagged versions; sentinels report their own version
  /// at activation time instead.
  pub fn bare(&self) -> Option<String> {
    match self {
      Self::Tagged(version) => Some(version.to_string()),
      Self::Canary | Self::Custom => None,
    }
  }
}

impl fmt::Display for VersionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.dir_name())
  }
}
