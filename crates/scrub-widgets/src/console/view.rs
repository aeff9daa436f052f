//! Console view function
//!
//! Lays out the toggle buttons, time labels, and slider in a rounded
//! backdrop. All styling and geometry lives here; the state structs stay
//! pure data.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Background, Border, Element, Length};

use super::state::{ConsoleLayout, ConsoleState};
use crate::slider::progress_slider;
use crate::theme::{ConsolePalette, BUTTON_SIZE, CORNER_RADIUS, LABEL_TEXT_SIZE};

const PLAY_GLYPH: &str = "▶";
const PAUSE_GLYPH: &str = "⏸";
const ENTER_FULLSCREEN_GLYPH: &str = "⛶";
const EXIT_FULLSCREEN_GLYPH: &str = "⧉";

/// Create a playback console element
///
/// # Arguments
///
/// * `state` - The console state (position, duration, toggles, labels)
/// * `palette` - Colors for the backdrop, labels, and slider
/// * `on_seek` - Callback closure called with the normalized slider value
///   (0.0 to 1.0) when the user presses or drags the track
/// * `on_play` - Message produced when the play/pause button is pressed
/// * `on_fullscreen` - Message produced when the fullscreen button is pressed
pub fn playback_console<'a, Message>(
    state: &'a ConsoleState,
    palette: &'a ConsolePalette,
    on_seek: impl Fn(f64) -> Message + 'a,
    on_play: Message,
    on_fullscreen: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    match state.layout() {
        ConsoleLayout::SingleLine => single_line(state, palette, on_seek, on_play, on_fullscreen),
    }
}

/// Single-line arrangement: play, elapsed, slider, remaining, fullscreen
fn single_line<'a, Message>(
    state: &'a ConsoleState,
    palette: &'a ConsolePalette,
    on_seek: impl Fn(f64) -> Message + 'a,
    on_play: Message,
    on_fullscreen: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let play_glyph = if state.is_playing() {
        PAUSE_GLYPH
    } else {
        PLAY_GLYPH
    };
    let play_button = button(text(play_glyph).size(18).center())
        .on_press(on_play)
        .padding(2)
        .width(Length::Fixed(BUTTON_SIZE))
        .height(Length::Fixed(BUTTON_SIZE));

    let fullscreen_glyph = if state.is_fullscreen() {
        EXIT_FULLSCREEN_GLYPH
    } else {
        ENTER_FULLSCREEN_GLYPH
    };
    let fullscreen_button = button(text(fullscreen_glyph).size(18).center())
        .on_press(on_fullscreen)
        .padding(2)
        .width(Length::Fixed(BUTTON_SIZE))
        .height(Length::Fixed(BUTTON_SIZE));

    let elapsed = text(state.elapsed_label())
        .size(LABEL_TEXT_SIZE)
        .color(palette.label_text);
    let remaining = text(state.remaining_label())
        .size(LABEL_TEXT_SIZE)
        .color(palette.label_text);

    let slider = progress_slider(state.slider(), palette, on_seek);

    let controls = row![play_button, elapsed, slider, remaining, fullscreen_button]
        .spacing(10)
        .padding(6)
        .align_y(Alignment::Center);

    let backdrop = palette.backdrop;
    container(controls)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(backdrop)),
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Seek(f64),
        Play,
        Fullscreen,
    }

    #[test]
    fn view_renders_default_state() {
        let state = ConsoleState::new();
        let palette = ConsolePalette::default();
        let _element: Element<'_, TestMessage> = playback_console(
            &state,
            &palette,
            TestMessage::Seek,
            TestMessage::Play,
            TestMessage::Fullscreen,
        );
    }

    #[test]
    fn view_renders_toggled_state() {
        let mut state = ConsoleState::new();
        state.toggle_play();
        state.toggle_fullscreen();
        let palette = ConsolePalette::default();
        let _element: Element<'_, TestMessage> = playback_console(
            &state,
            &palette,
            TestMessage::Seek,
            TestMessage::Play,
            TestMessage::Fullscreen,
        );
    }
}
