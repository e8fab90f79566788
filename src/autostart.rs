// SPDX-License-Identifier: MPL-2.0
//! One-shot background-autostart registration via the XDG Background
//! portal.
//!
//! Issued once at startup, after the window is already up. The portal
//! library generates the request's correlation token and matches the async
//! Response signal for us; a denial comes back as an error the shell
//! surfaces in a modal dialog. Nothing else depends on the outcome.

use crate::error::{Error, Result};
use ashpd::desktop::background::Background;

/// Reason string shown by the desktop environment's permission prompt.
const REASON: &str = "Keep the Steam Deck Repo library synced in the background";

/// Requests permission to autostart and run in the background.
pub async fn register() -> Result<()> {
    let response = Background::request()
        .reason(REASON)
        .auto_start(true)
        .command(&["deckrepo"])
        .dbus_activatable(false)
        .send()
        .await?
        .response()?;

    if !response.run_in_background() {
        return Err(Error::Portal("background execution denied".into()));
    }

    tracing::debug!(
        auto_start = response.auto_start(),
        "background portal request granted"
    );
    Ok(())
}
