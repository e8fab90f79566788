// SPDX-License-Identifier: MPL-2.0
//! Banner shown when a newer release exists. Purely informational; the
//! shell omits it entirely while the check is pending or up to date.

use crate::ui::theme::{palette, spacing};
use crate::update_check::{UpdateStatus, CURRENT_VERSION};
use iced::widget::{text, Container, Row};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(status: &UpdateStatus) -> Element<'a, Message> {
    let line = Row::new()
        .spacing(spacing::SM)
        .push(text(format!(
            "Update available: {} (you are on {}).",
            status.latest, CURRENT_VERSION
        )))
        .push(text("Get it from steamdeckrepo.com").color(palette::ACCENT));

    Container::new(line)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(crate::ui::theme::panel(palette::ACCENT))
        .into()
}
