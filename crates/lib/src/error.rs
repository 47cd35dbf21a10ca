//! Error types for spinver-lib.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in spinver operations.
///
/// Input and network errors are never retried; filesystem errors carry the
/// failing path. Removing something that is already absent is not an error
/// (see [`crate::store::RemoveOutcome`]).
#[derive(Debug, Error)]
pub enum Error {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("you must indicate the version of spin you wish to use")]
  VersionRequired,

  #[error("the requested version {0:?} is not proper semver (i.e. v0.0.0 or 0.0.0)")]
  InvalidVersion(String),

  #[error("{0:?} is not an OS that spinver supports")]
  UnsupportedOs(String),

  #[error("{0:?} is not an architecture that spin supports")]
  UnsupportedArch(String),

  #[error("the version number provided is invalid: {version}")]
  ReleaseNotFound { version: String },

  #[error("unauthorized: bad credentials; check the token in the {env_var} environment variable")]
  BadCredentials { env_var: &'static str },

  #[error("no custom binary is registered; create one with the alias command first")]
  CustomNotRegistered,

  #[error("failed to remove old symlink '{path}': {source}")]
  RemoveLink {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to create symlink '{link}' -> '{target}': {source}")]
  CreateLink {
    link: PathBuf,
    target: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to move extracted binary '{path}': {source}")]
  MoveBinary {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to run '{command}': {message}")]
  VersionProbe { command: String, message: String },

  #[error(
    "the version reported by the current spin executable does not match what was requested; \
     check that {link_dir} is prepended to your PATH"
  )]
  ActivationMismatch { link_dir: PathBuf },
}
