//! Playback console
//!
//! The console composes the progress slider with elapsed/remaining time
//! labels and play/fullscreen toggle buttons, and owns the state that ties
//! them together: total duration, current position, and the two toggle
//! flags.
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! let console = playback_console(
//!     &self.console,
//!     &palette,
//!     Message::Seek,
//!     Message::TogglePlay,
//!     Message::ToggleFullscreen,
//! );
//! ```

pub mod clock;
mod state;
mod view;

pub use clock::format_clock;
pub use state::{ConsoleLayout, ConsoleObserver, ConsoleState};
pub use view::playback_console;
