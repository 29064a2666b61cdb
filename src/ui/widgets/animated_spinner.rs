// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Fraction of the full circle covered by the animated arc.
const ARC_SWEEP: f32 = TAU * 2.0 / 3.0;

/// Animated spinner that rotates smoothly.
///
/// The rotation angle comes from the caller, advanced by the tick
/// subscription while a load is pending; the widget itself is stateless
/// between frames.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Overrides the rendered diameter.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 3.0;

                // Faint full ring underneath the moving arc
                let ring = Path::circle(center, radius);
                frame.stroke(
                    &ring,
                    Stroke::default().with_width(2.5).with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
                );

                // The arc starts at the top and sweeps clockwise; built from
                // line segments because the canvas path API has no arc-to.
                let start_angle = self.rotation - PI / 2.0;
                let segments = 24;
                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(point_on_circle(center, radius, start_angle));
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + ARC_SWEEP * t;
                    arc_path.line_to(point_on_circle(center, radius, angle));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(2.5)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
