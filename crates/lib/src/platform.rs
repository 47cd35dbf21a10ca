//! Host platform detection and release asset naming.
//!
//! Spin publishes release archives for two operating systems and two CPU
//! architectures. Anything else fails up front with an input error rather
//! than a broken download URL.

use std::fmt;

use crate::{Error, Result};

/// Operating systems spin releases are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
  Linux,
  MacOs,
}

impl Os {
  /// Detect the current operating system at runtime.
  pub fn current() -> Result<Self> {
    match std::env::consts::OS {
      "linux" => Ok(Self::Linux),
      "macos" => Ok(Self::MacOs),
      other => Err(Error::UnsupportedOs(other.to_string())),
    }
  }

  /// The OS segment of a release asset name.
  pub fn asset_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "macos",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.asset_str())
  }
}

/// CPU architectures spin releases are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
  Amd64,
  Aarch64,
}

impl Arch {
  /// Detect the current CPU architecture at runtime.
  pub fn current() -> Result<Self> {
    match std::env::consts::ARCH {
      "x86_64" => Ok(Self::Amd64),
      "aarch64" => Ok(Self::Aarch64),
      other => Err(Error::UnsupportedArch(other.to_string())),
    }
  }

  /// The architecture segment of a release asset name.
  pub fn asset_str(&self) -> &'static str {
    match self {
      Self::Amd64 => "amd64",
      Self::Aarch64 => "aarch64",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.asset_str())
  }
}

/// The host platform a release asset must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
  pub os: Os,
  pub arch: Arch,
}

impl Platform {
  /// Detect the host platform, failing on unsupported OS or architecture.
  pub fn detect() -> Result<Self> {
    Ok(Self {
      os: Os::current()?,
      arch: Arch::current()?,
    })
  }

  /// Name of the release archive for the given tag on this platform,
  /// e.g. `spin-v2.1.0-linux-amd64.tar.gz`.
  pub fn asset_name(&self, tag: &str) -> String {
    format!(
      "{}-{}-{}-{}.tar.gz",
      crate::BINARY_NAME,
      tag,
      self.os.asset_str(),
      self.arch.asset_str()
    )
  }
}
