//! GitHub release endpoints for spin.
//!
//! Two read-only endpoints are used: the latest-release metadata document
//! (for the `latest` shorthand) and the releases listing (for `list-remote`).
//! Archive download URLs are built from the same host. Base URLs are held on
//! [`Remote`] so tests can point them at a local mock server.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{Error, Result};

const DEFAULT_API_BASE: &str = "https://api.github.com/repos/fermyon/spin";
const DEFAULT_DOWNLOAD_BASE: &str = "https://github.com/fermyon/spin";

/// Environment variable holding an optional GitHub token for the listing
/// endpoint (unauthenticated requests are rate-limited aggressively).
pub const TOKEN_ENV_VAR: &str = "GH_TOKEN";

/// One release as returned by the GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
  pub tag_name: String,
}

/// Client for the spin release endpoints.
#[derive(Debug, Clone)]
pub struct Remote {
  api_base: String,
  download_base: String,
}

impl Default for Remote {
  fn default() -> Self {
    Self {
      api_base: DEFAULT_API_BASE.to_string(),
      download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
    }
  }
}

impl Remote {
  /// Create a client with explicit base URLs (used by tests).
  pub fn new(api_base: impl Into<String>, download_base: impl Into<String>) -> Self {
    Self {
      api_base: api_base.into(),
      download_base: download_base.into(),
    }
  }

  /// Archive URL for one release asset.
  pub fn download_url(&self, tag: &str, asset: &str) -> String {
    format!("{}/releases/download/{}/{}", self.download_base, tag, asset)
  }

  /// Tag of the latest stable release.
  pub fn latest_tag(&self) -> Result<String> {
    let url = format!("{}/releases/latest", self.api_base);
    debug!(url, "fetching latest release tag");

    let release: Release = client()?.get(&url).send()?.error_for_status()?.json()?;
    info!(tag = %release.tag_name, "resolved latest stable release");
    Ok(release.tag_name)
  }

  /// All published releases, newest first (GitHub API order).
  ///
  /// Sends `Authorization: token $GH_TOKEN` when the variable is set; a 401
  /// response is reported as a credential error naming the variable.
  pub fn releases(&self) -> Result<Vec<Release>> {
    let url = format!("{}/releases", self.api_base);
    debug!(url, "fetching release listing");

    let mut request = client()?.get(&url);
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
      if !token.is_empty() {
        request = request.header(reqwest::header::AUTHORIZATION, format!("token {}", token));
      }
    }

    let response = request.send()?;
    if response.status() == reqwest::StatusCode::UNAUTHORIZED {
      return Err(Error::BadCredentials { env_var: TOKEN_ENV_VAR });
    }

    let releases: Vec<Release> = response.error_for_status()?.json()?;
    Ok(releases)
  }
}

/// Blocking client used for the metadata endpoints.
///
/// GitHub rejects requests without a user agent. Downloads go through the
/// same builder in `fetch`, with no overall timeout (transport defaults
/// only), so a stalled archive download is not cut short mid-stream.
pub(crate) fn client() -> Result<reqwest::blocking::Client> {
  let client = reqwest::blocking::Client::builder()
    .user_agent(concat!("spinver/", env!("CARGO_PKG_VERSION")))
    .connect_timeout(Duration::from_secs(30))
    .build()?;
  Ok(client)
}
