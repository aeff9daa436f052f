//! Canvas Program implementation for the progress slider
//!
//! Implements the iced canvas `Program` trait: draws the track, fill, and
//! handle, and translates pointer events into normalized values published
//! through a callback closure.

use std::time::Instant;

use iced::widget::canvas::{self, Event, Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{mouse, Point, Rectangle, Size, Theme};

use super::state::SliderState;
use crate::theme::{ConsolePalette, HANDLE_WIDTH, TRACK_MARGIN, TRACK_WIDTH};

/// Canvas state for tracking slider mouse interaction
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderInteraction {
    /// Whether the left button is down (for drag tracking)
    pub is_dragging: bool,
}

/// Map a pointer x-coordinate (relative to the canvas) to a normalized value
///
/// Inside the left margin maps to 0, inside the right margin to 1, and the
/// span between interpolates linearly. Coordinates past either edge of the
/// canvas clamp the same way.
pub fn track_value(x: f32, width: f32) -> f64 {
    if x < TRACK_MARGIN {
        0.0
    } else if x > width - TRACK_MARGIN {
        1.0
    } else {
        f64::from((x - TRACK_MARGIN) / (width - 2.0 * TRACK_MARGIN))
    }
}

/// Canvas program for the draggable progress slider
///
/// Takes a callback closure `on_change` that's called with the normalized
/// value (0.0 to 1.0) when the user presses or drags on the track.
pub struct SliderCanvas<'a, Message, F>
where
    F: Fn(f64) -> Message,
{
    pub state: &'a SliderState,
    pub palette: &'a ConsolePalette,
    pub on_change: F,
}

impl<'a, Message, F> Program<Message> for SliderCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(f64) -> Message,
{
    type State = SliderInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    interaction.is_dragging = true;
                    let value = track_value(position.x, bounds.width);
                    return Some(canvas::Action::publish((self.on_change)(value)));
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                interaction.is_dragging = false;
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if interaction.is_dragging {
                    // Keep tracking relative to the canvas even when the
                    // cursor has left it; the mapping clamps overshoot to
                    // the track ends.
                    if let Some(position) = cursor.position() {
                        let value = track_value(position.x - bounds.x, bounds.width);
                        return Some(canvas::Action::publish((self.on_change)(value)));
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let width = bounds.width;
        let height = bounds.height;
        let center_y = height / 2.0;
        let span = width - 2.0 * TRACK_MARGIN;
        let displayed = self.state.displayed(Instant::now()).clamp(0.0, 1.0) as f32;

        // Background track
        let track = Path::line(
            Point::new(TRACK_MARGIN, center_y),
            Point::new(width - TRACK_MARGIN, center_y),
        );
        frame.stroke(
            &track,
            Stroke::default()
                .with_color(self.palette.track_back)
                .with_width(TRACK_WIDTH)
                .with_line_cap(LineCap::Round),
        );

        // Filled progress
        if displayed > 0.0 {
            let progress = Path::line(
                Point::new(TRACK_MARGIN, center_y),
                Point::new(TRACK_MARGIN + span * displayed, center_y),
            );
            frame.stroke(
                &progress,
                Stroke::default()
                    .with_color(self.palette.track_front)
                    .with_width(TRACK_WIDTH)
                    .with_line_cap(LineCap::Round),
            );
        }

        // Drag handle: a narrow bar spanning the full height, centered on
        // the displayed position
        let handle_x = TRACK_MARGIN + span * displayed - HANDLE_WIDTH / 2.0;
        let handle = Path::rounded_rectangle(
            Point::new(handle_x, 0.0),
            Size::new(HANDLE_WIDTH, height),
            1.0.into(),
        );
        frame.fill(&handle, self.palette.handle);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_margin_maps_to_zero() {
        assert_eq!(track_value(5.0, 220.0), 0.0);
        assert_eq!(track_value(-40.0, 220.0), 0.0);
        assert_eq!(track_value(9.9, 220.0), 0.0);
    }

    #[test]
    fn right_margin_maps_to_one() {
        assert_eq!(track_value(215.0, 220.0), 1.0);
        assert_eq!(track_value(1000.0, 220.0), 1.0);
    }

    #[test]
    fn span_interpolates_linearly() {
        assert!((track_value(115.0, 220.0) - 0.525).abs() < 1e-6);
        assert_eq!(track_value(10.0, 220.0), 0.0);
        assert_eq!(track_value(210.0, 220.0), 1.0);
        assert!((track_value(110.0, 220.0) - 0.5).abs() < 1e-6);
    }
}
