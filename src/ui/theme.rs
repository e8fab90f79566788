// SPDX-License-Identifier: MPL-2.0
//! Layout constants and shared widget styles.

use iced::widget::{button, container};
use iced::{Border, Color, Theme};

/// Outer margin and vertical rhythm of the window, matching the library's
/// row spacing.
pub const GLOBAL_SPACING: f32 = 20.0;

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    /// Rendered height of a card thumbnail.
    pub const THUMBNAIL_HEIGHT: f32 = 160.0;
    /// Diameter of the busy spinner.
    pub const SPINNER: f32 = 36.0;
}

pub mod palette {
    use iced::Color;

    pub const ACCENT: Color = Color::from_rgb(0.10, 0.45, 0.80);
    pub const MUTED: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const ERROR: Color = Color::from_rgb(0.75, 0.15, 0.15);
}

/// Style for controls that are visible but insensitive, like the load-more
/// button while a pagination fetch is in flight.
pub fn insensitive_button(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: palette.background.weak.text,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Bordered panel used by the update banner and the error affordance.
pub fn panel(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color,
        },
        ..container::Style::default()
    }
}
