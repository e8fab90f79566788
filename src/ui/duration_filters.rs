// SPDX-License-Identifier: MPL-2.0
//! Duration filter panel.
//!
//! Collapsed by default; the header's toggle expands it. Selecting a range
//! narrows the displayed records client-side, so pagination state is not
//! touched by filter changes.

use crate::ui::theme::spacing;
use iced::widget::{button, text, Row};
use iced::Element;

/// Clip-length buckets offered by the panel. Records without a known
/// duration only match [`DurationRange::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationRange {
    #[default]
    Any,
    /// Under a minute.
    Short,
    /// One to five minutes.
    Medium,
    /// Over five minutes.
    Long,
}

impl DurationRange {
    pub const ALL: [DurationRange; 4] = [
        DurationRange::Any,
        DurationRange::Short,
        DurationRange::Medium,
        DurationRange::Long,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DurationRange::Any => "Any length",
            DurationRange::Short => "Under 1 min",
            DurationRange::Medium => "1–5 min",
            DurationRange::Long => "Over 5 min",
        }
    }

    /// Whether a record with the given duration belongs to this bucket.
    pub fn matches(self, duration_secs: Option<u32>) -> bool {
        match self {
            DurationRange::Any => true,
            DurationRange::Short => matches!(duration_secs, Some(secs) if secs < 60),
            DurationRange::Medium => {
                matches!(duration_secs, Some(secs) if (60..=300).contains(&secs))
            }
            DurationRange::Long => matches!(duration_secs, Some(secs) if secs > 300),
        }
    }
}

/// Panel state owned by the shell.
#[derive(Debug, Default)]
pub struct State {
    pub expanded: bool,
    pub selected: DurationRange,
}

impl State {
    /// Flips the expanded/collapsed visual state (header icon click).
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    RangeSelected(DurationRange),
}

/// Events propagated to the shell.
#[derive(Debug, Clone)]
pub enum Event {
    /// The active range changed; the shell re-renders with the new filter.
    SelectionChanged,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::RangeSelected(range) => {
            state.selected = range;
            Event::SelectionChanged
        }
    }
}

/// Renders the row of range buttons. Only called while expanded.
pub fn view(state: &State) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for range in DurationRange::ALL {
        let mut chip = button(text(range.label())).padding([spacing::XS, spacing::SM]);
        if range != state.selected {
            chip = chip.on_press(Message::RangeSelected(range));
        }
        row = row.push(chip);
    }
    row.into()
}
