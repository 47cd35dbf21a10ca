mod alias;
mod get;
mod list;
mod list_remote;
mod remove;
mod set;
mod update;

pub use alias::cmd_alias;
pub use get::cmd_get;
pub use list::cmd_list;
pub use list_remote::cmd_list_remote;
pub use remove::cmd_remove;
pub use set::cmd_set;
pub use update::cmd_update_canary;

use anyhow::Result;
use spinver_lib::remote::Remote;
use spinver_lib::{Store, VersionId};
use tracing::debug;

/// Open the store at its conventional (or `SPINVER_STORE`-overridden) root.
pub(crate) fn open_store() -> Result<Store> {
  Ok(Store::open_default()?)
}

/// Turn resolver output into a concrete version identity.
///
/// The reserved word `latest` is resolved against the release metadata
/// endpoint before parsing, so `spinver set latest` works without the user
/// knowing the current tag.
pub(crate) fn parse_version(input: &str, remote: &Remote) -> Result<VersionId> {
  let raw = if input == "latest" { remote.latest_tag()? } else { input.to_string() };
  let id = VersionId::parse(&raw)?;
  debug!(input, version = %id, "resolved version identity");
  Ok(id)
}
