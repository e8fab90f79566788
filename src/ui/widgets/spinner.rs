// SPDX-License-Identifier: MPL-2.0
//! Busy spinner drawn on a canvas, rotated by the shell's Tick messages.

use crate::ui::theme::{palette, sizing};
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const STROKE_WIDTH: f32 = 3.0;
/// Fraction of the circle covered by the moving arc.
const SWEEP: f32 = 0.42;

pub struct Spinner {
    cache: Cache,
    rotation: f32,
}

impl Spinner {
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

            let track = Path::circle(center, radius);
            frame.stroke(
                &track,
                Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                    a: 0.2,
                    ..palette::ACCENT
                }),
            );

            let start = self.rotation % TAU;
            let sweep = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + SWEEP * TAU),
                });
            });
            frame.stroke(
                &sweep,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(palette::ACCENT)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}
