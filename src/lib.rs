// SPDX-License-Identifier: MPL-2.0
//! `deckrepo` is a desktop browser for the Steam Deck Repo video library,
//! built with the Iced GUI framework.
//!
//! It shows the library as paginated rows of thumbnails, with debounced
//! search, a duration filter, an update-available banner, and one-shot
//! background-autostart registration through the XDG desktop portal.

pub mod api;
pub mod app;
pub mod autostart;
pub mod debounce;
pub mod error;
pub mod ui;
pub mod update_check;
