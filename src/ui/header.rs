// SPDX-License-Identifier: MPL-2.0
//! Library header: the search entry and the duration-filter toggle.
//!
//! The header is a stateless emitter. Every keystroke in the entry is
//! forwarded upward as an event; the shell's debouncer decides when a
//! fetch actually happens.

use crate::ui::theme::spacing;
use iced::alignment::Vertical;
use iced::widget::{button, text, text_input, Row};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    /// Live contents of the search entry (owned by the shell).
    pub search_input: &'a str,
    /// Whether the duration filter panel is currently expanded, so the
    /// toggle can show its state.
    pub filters_expanded: bool,
}

/// Messages emitted by the header widgets.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ToggleFilters,
}

/// Events propagated to the shell.
#[derive(Debug, Clone)]
pub enum Event {
    SearchChanged(String),
    ToggleFilters,
}

/// Maps a header message to its shell event. The header keeps no state of
/// its own, so this is a pure translation.
pub fn update(message: Message) -> Event {
    match message {
        Message::SearchChanged(value) => Event::SearchChanged(value),
        Message::ToggleFilters => Event::ToggleFilters,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let search = text_input("Search videos", ctx.search_input)
        .on_input(Message::SearchChanged)
        .padding(spacing::SM)
        .width(Length::Fill);

    let toggle_label = if ctx.filters_expanded {
        "Duration \u{25B4}"
    } else {
        "Duration \u{25BE}"
    };
    let filter_toggle = button(text(toggle_label))
        .on_press(Message::ToggleFilters)
        .padding(spacing::SM);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(search)
        .push(filter_toggle)
        .into()
}
