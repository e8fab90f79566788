// SPDX-License-Identifier: MPL-2.0
//! One visual row of the library: a fixed-size batch of video cards.
//!
//! Rows are pure views over a slice of records; the shell re-chunks the
//! full record list on every render, so batch `i` always holds records
//! `[i*3, i*3+3)` of the list in fetch order.

use crate::api::VideoRecord;
use crate::ui::theme::{palette, sizing, spacing};
use iced::widget::image::{Handle, Image};
use iced::widget::{text, Column, Container, Row, Space};
use iced::{Element, Length};
use std::collections::HashMap;
use std::slice::Chunks;

/// Records per row. The last batch of a fetch may be partial.
pub const ROW_COUNT: usize = 3;

/// Chunks a record list into row batches (`ceil(len / ROW_COUNT)` of them).
/// Generic so it covers both the raw record list and the filtered list of
/// references the shell renders from.
pub fn batches<T>(records: &[T]) -> Chunks<'_, T> {
    records.chunks(ROW_COUNT)
}

/// Renders one batch as an evenly-spaced row. Missing cards in a partial
/// batch are padded with blanks so earlier cards keep their width.
pub fn view<'a, Message: 'a>(
    batch: &[&'a VideoRecord],
    thumbnails: &HashMap<u64, Handle>,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);

    for &record in batch {
        row = row.push(card(record, thumbnails.get(&record.id)));
    }
    for _ in batch.len()..ROW_COUNT {
        row = row.push(Space::new(Length::FillPortion(1), Length::Shrink));
    }

    row.into()
}

fn card<'a, Message: 'a>(
    record: &'a VideoRecord,
    thumbnail: Option<&Handle>,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        // Bytes still in flight; hold the card's shape.
        None => Container::new(Space::new(Length::Fill, Length::Fixed(sizing::THUMBNAIL_HEIGHT)))
            .style(crate::ui::theme::panel(palette::MUTED))
            .into(),
    };

    let mut meta = Row::new()
        .spacing(spacing::SM)
        .push(text(format!("\u{2665} {}", record.likes)).size(13).color(palette::MUTED));
    if let Some(secs) = record.duration_secs {
        meta = meta.push(text(format_duration(secs)).size(13).color(palette::MUTED));
    }
    if let Some(created_at) = record.created_at {
        meta = meta.push(
            text(created_at.format("%b %e, %Y").to_string())
                .size(13)
                .color(palette::MUTED),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(preview)
        .push(text(record.title.as_str()).size(16));
    if !record.author.is_empty() {
        column = column.push(text(format!("by {}", record.author)).size(13).color(palette::MUTED));
    }
    column = column.push(meta);

    Container::new(column).width(Length::FillPortion(1)).into()
}

/// `125` -> `2:05`; hours appear only past the hour mark.
fn format_duration(secs: u32) -> String {
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
