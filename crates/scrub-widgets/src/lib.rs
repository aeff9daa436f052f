//! Playback console widgets for scrub video applications
//!
//! This crate provides a reusable on-screen control strip for a video
//! player: play/pause and fullscreen toggles, elapsed/remaining time
//! labels, and a draggable progress slider rendered on a canvas.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`ConsoleState`, `SliderState`)
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: Handle custom rendering and event-to-callback
//!   translation (`SliderCanvas`)
//!
//! Host applications own the state, route the published messages back into
//! the state methods, and may install a [`ConsoleObserver`] to be told
//! about position and toggle changes.

pub mod console;
pub mod slider;
pub mod theme;

// Re-export commonly used items
pub use theme::{
    ConsolePalette, BUTTON_SIZE, CORNER_RADIUS, HANDLE_WIDTH, LABEL_TEXT_SIZE, SLIDER_HEIGHT,
    TRACK_MARGIN, TRACK_WIDTH, VALUE_TRANSITION,
};

pub use console::{format_clock, playback_console, ConsoleLayout, ConsoleObserver, ConsoleState};

pub use slider::{progress_slider, SliderInteraction, SliderState};
