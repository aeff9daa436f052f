//! Shared theme constants for the playback console
//!
//! Colors and layout metrics used by the console container and the
//! progress slider. Configurable via ~/.config/scrub-player/theme.yaml in
//! scrub-player.

use std::time::Duration;

use iced::Color;

/// Horizontal inset of the slider track from each edge of the canvas
pub const TRACK_MARGIN: f32 = 10.0;

/// Stroke width of the background and progress tracks
pub const TRACK_WIDTH: f32 = 2.0;

/// Width of the drag handle bar
pub const HANDLE_WIDTH: f32 = 2.0;

/// Height of the slider canvas in pixels
pub const SLIDER_HEIGHT: f32 = 20.0;

/// Side length of the play and fullscreen toggle buttons
pub const BUTTON_SIZE: f32 = 30.0;

/// Corner radius of the console backdrop
pub const CORNER_RADIUS: f32 = 4.0;

/// Text size of the elapsed/remaining time labels
pub const LABEL_TEXT_SIZE: f32 = 12.0;

/// Length of the slider's visual transition when its value changes
pub const VALUE_TRANSITION: Duration = Duration::from_millis(100);

/// Console color set
///
/// Defaults match the classic single-line console look: dark-gray backdrop,
/// black track with a gray fill, white handle and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolePalette {
    /// Console backdrop fill
    pub backdrop: Color,
    /// Unfilled part of the slider track
    pub track_back: Color,
    /// Filled (elapsed) part of the slider track
    pub track_front: Color,
    /// Drag handle bar
    pub handle: Color,
    /// Time label text
    pub label_text: Color,
}

impl Default for ConsolePalette {
    fn default() -> Self {
        Self {
            backdrop: Color::from_rgb(0.33, 0.33, 0.33),
            track_back: Color::BLACK,
            track_front: Color::from_rgb(0.5, 0.5, 0.5),
            handle: Color::WHITE,
            label_text: Color::WHITE,
        }
    }
}
