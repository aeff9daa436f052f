//! Draggable progress slider
//!
//! A horizontal track with a filled progress segment and a narrow drag
//! handle, rendered on an iced canvas. Pointer presses and drags are
//! translated into a normalized value in [0, 1] and published through a
//! callback closure.
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! let slider = progress_slider(
//!     self.console.slider(),
//!     &palette,
//!     |value| Message::Seek(value),
//! );
//! ```

mod canvas;
mod state;
mod view;

pub use canvas::{track_value, SliderCanvas, SliderInteraction};
pub use state::SliderState;
pub use view::progress_slider;
