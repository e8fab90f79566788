// SPDX-License-Identifier: MPL-2.0
//! UI components of the library browser.

pub mod duration_filters;
pub mod header;
pub mod library_row;
pub mod theme;
pub mod update_banner;
pub mod widgets;
