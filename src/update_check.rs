// SPDX-License-Identifier: MPL-2.0
//! Update notification collaborator.
//!
//! Queries the project's latest published release and compares its tag to
//! the running version. The shell starts the check once at construction and
//! only shows the banner when `should_update` comes back true.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Version of the running binary, displayed in the footer.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const LATEST_RELEASE_URL: &str =
    "https://api.github.com/repos/deckrepo/deckrepo/releases/latest";

#[derive(Debug, Clone)]
pub struct UpdateStatus {
    /// Latest released tag, e.g. `v1.5.0`.
    pub latest: String,
    pub should_update: bool,
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Splits a dotted version into numeric components. A leading `v` is
/// stripped; non-numeric components count as zero so a malformed remote
/// tag can never claim to be newer than a well-formed local version.
fn version_components(version: &str) -> Vec<u64> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

/// Componentwise numeric comparison; missing components count as zero, so
/// `1.4` and `1.4.0` are equal.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    let a = version_components(candidate);
    let b = version_components(current);
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x > y;
        }
    }
    false
}

/// Fetches the latest release tag and decides whether the running version
/// is behind it.
pub async fn check_latest(client: reqwest::Client) -> Result<UpdateStatus> {
    let response = client.get(LATEST_RELEASE_URL).send().await?;
    if !response.status().is_success() {
        return Err(Error::Api(format!("HTTP status {}", response.status())));
    }

    let release: LatestRelease = response.json().await?;
    let should_update = is_newer(&release.tag_name, CURRENT_VERSION);
    tracing::debug!(latest = %release.tag_name, should_update, "update check finished");

    Ok(UpdateStatus {
        latest: release.tag_name,
        should_update,
    })
}
