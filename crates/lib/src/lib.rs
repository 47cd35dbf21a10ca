//! spinver-lib: core logic for the spinver version manager.
//!
//! This crate provides everything the `spinver` CLI builds on:
//! - `VersionId`: the tagged union of managed version identities
//! - `Store`: the on-disk version tree and its housekeeping
//! - `fetch`/`extract`: the download-and-unpack pipeline
//! - `activate`: the current-version symlink switch
//! - `alias`: named indirections to arbitrary local binaries

pub mod activate;
pub mod alias;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod platform;
pub mod remote;
pub mod resolve;
pub mod store;
pub mod version;

pub use error::Error;
pub use store::Store;
pub use version::VersionId;

/// Result type for spinver-lib operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Canonical name of the managed binary inside every version directory.
pub const BINARY_NAME: &str = "spin";

/// Directory under the store root that holds the active-version symlink.
pub const CURRENT_VERSION_DIR: &str = "current_version";

/// Marker file read from the working directory when no version is given.
pub const RC_FILE_NAME: &str = ".spinrc";
