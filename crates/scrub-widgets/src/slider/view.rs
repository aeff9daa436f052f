//! Slider view function

use iced::widget::Canvas;
use iced::{Element, Length};

use super::canvas::SliderCanvas;
use super::state::SliderState;
use crate::theme::{ConsolePalette, SLIDER_HEIGHT};

/// Create a progress slider element
///
/// # Arguments
///
/// * `state` - The slider state holding the normalized value
/// * `palette` - Colors for the track, fill, and handle
/// * `on_change` - Callback closure called with the normalized value
///   (0.0 to 1.0) on press/drag
pub fn progress_slider<'a, Message>(
    state: &'a SliderState,
    palette: &'a ConsolePalette,
    on_change: impl Fn(f64) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(SliderCanvas {
        state,
        palette,
        on_change,
    })
    .width(Length::Fill)
    .height(Length::Fixed(SLIDER_HEIGHT))
    .into()
}
