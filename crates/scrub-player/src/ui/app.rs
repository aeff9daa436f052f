//! Main iced application for the scrub demo player
//!
//! Owns the console state and the simulated playback clock, routes console
//! messages into them, and mirrors the fullscreen toggle onto the real
//! window.

use std::rc::Rc;
use std::time::Duration;

use iced::time;
use iced::widget::{column, container, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};

use scrub_widgets::{playback_console, ConsoleObserver, ConsoleState};

use super::theme;
use crate::config::PlayerConfig;
use crate::engine::PlaybackClock;

/// Application state
pub struct PlayerApp {
    /// Console widget state
    console: ConsoleState,
    /// Simulated playback engine
    clock: PlaybackClock,
    /// Tick cadence from config
    tick_interval: Duration,
    /// Keeps the logging observer alive; the console only holds a weak handle
    _observer: Rc<LogObserver>,
}

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Tick for periodic UI updates (clock advance, slider transition redraw)
    Tick,
    /// Slider moved to a normalized position (0.0-1.0)
    Seek(f64),
    /// Play/pause button pressed
    TogglePlay,
    /// Fullscreen button pressed
    ToggleFullscreen,
}

/// Console observer that traces notifications to the log
///
/// A real player would start/stop decoding here; the demo just records what
/// the console reported.
struct LogObserver;

impl ConsoleObserver for LogObserver {
    fn slider_value_changed(&self, value: f64) {
        log::debug!("console position changed: {:.2}s", value);
    }

    fn play_status_changed(&self, playing: bool) {
        log::info!("play status changed: {}", playing);
    }

    fn fullscreen_status_changed(&self, fullscreen: bool) {
        log::info!("fullscreen status changed: {}", fullscreen);
    }
}

impl PlayerApp {
    /// Create a new application instance
    pub fn new(config: PlayerConfig) -> Self {
        let observer = Rc::new(LogObserver);
        let handle: Rc<dyn ConsoleObserver> = observer.clone();

        let mut console = ConsoleState::new();
        console.set_observer(&handle);
        console.set_duration(config.playback.duration_secs);

        let clock = PlaybackClock::new(config.playback.duration_secs, config.playback.start_secs);
        if clock.duration() > 0.0 {
            console.set_normalized(clock.position() / clock.duration());
        }
        if config.playback.autoplay {
            console.toggle_play();
        }

        Self {
            console,
            clock,
            tick_interval: Duration::from_millis(config.display.tick_ms.max(1)),
            _observer: observer,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if self.console.is_playing() && !self.clock.at_end() {
                    let position = self.clock.tick(self.tick_interval.as_secs_f64());
                    if self.clock.duration() > 0.0 {
                        self.console
                            .set_normalized(position / self.clock.duration());
                    }
                }
                Task::none()
            }

            Message::Seek(value) => {
                self.console.set_normalized(value);
                self.clock.seek(self.console.current());
                Task::none()
            }

            Message::TogglePlay => {
                self.console.toggle_play();
                Task::none()
            }

            Message::ToggleFullscreen => {
                let fullscreen = self.console.toggle_fullscreen();
                let mode = if fullscreen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                window::get_latest().and_then(move |id| window::change_mode(id, mode))
            }
        }
    }

    /// Subscribe to periodic updates
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(self.tick_interval).map(|_| Message::Tick)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        // Stage placeholder where video frames would render
        let status = if self.console.is_playing() {
            "Playing"
        } else {
            "Paused"
        };
        let stage = container(text(format!("{} — {}", status, self.console.elapsed_label())).size(24))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        let console = playback_console(
            &self.console,
            theme::palette(),
            Message::Seek,
            Message::TogglePlay,
            Message::ToggleFullscreen,
        );

        container(column![stage, console].spacing(10).align_x(Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
