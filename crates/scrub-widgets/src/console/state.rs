//! Console state
//!
//! Pure data for the playback console: total duration, current position,
//! the two toggle flags, and the label strings derived from them. An
//! optional observer is told about position and toggle changes; the console
//! only holds a weak handle to it, so the owner controls its lifetime.

use std::rc::{Rc, Weak};

use super::clock::format_clock;
use crate::slider::SliderState;

/// Observer for user-visible console changes
///
/// Implemented by whoever constructs the console (typically the application
/// driving actual playback). Installed with [`ConsoleState::set_observer`];
/// every notification is a no-op while no observer is set or after the
/// owner dropped it.
pub trait ConsoleObserver {
    /// The playback position changed; `value` is the new position in seconds
    fn slider_value_changed(&self, value: f64);

    /// The play/pause toggle flipped; `playing` is the new state
    fn play_status_changed(&self, playing: bool);

    /// The fullscreen toggle flipped; `fullscreen` is the new state
    fn fullscreen_status_changed(&self, fullscreen: bool);
}

/// Console layout variants
///
/// Only the single-line arrangement exists today; the enum is matched
/// exhaustively at the view call site so additional layouts (stacked,
/// compact) slot in without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleLayout {
    /// Buttons, labels, and slider on one horizontal line
    #[default]
    SingleLine,
}

/// State for the playback console
pub struct ConsoleState {
    layout: ConsoleLayout,
    /// Total duration in seconds
    duration: f64,
    /// Current position in seconds, kept within [0, duration]
    current: f64,
    playing: bool,
    fullscreen: bool,
    slider: SliderState,
    elapsed_label: String,
    remaining_label: String,
    observer: Option<Weak<dyn ConsoleObserver>>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            layout: ConsoleLayout::SingleLine,
            duration: 3600.0,
            current: 0.0,
            playing: false,
            fullscreen: false,
            slider: SliderState::new(),
            elapsed_label: "00:00:00".to_string(),
            remaining_label: "00:00:00".to_string(),
            observer: None,
        }
    }

    /// Install the observer; the console keeps only a weak handle
    pub fn set_observer(&mut self, observer: &Rc<dyn ConsoleObserver>) {
        self.observer = Some(Rc::downgrade(observer));
    }

    fn notify(&self, f: impl FnOnce(&dyn ConsoleObserver)) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            f(observer.as_ref());
        }
    }

    /// Set the current position in seconds
    ///
    /// Clamps to [0, duration], rebuilds both labels, and notifies the
    /// observer with the applied value.
    pub fn set_current(&mut self, secs: f64) {
        let secs = secs.clamp(0.0, self.duration);
        self.current = secs;
        self.elapsed_label = format_clock(secs);
        self.remaining_label = format_clock(self.duration - secs);
        self.notify(|observer| observer.slider_value_changed(secs));
    }

    /// Set the total duration in seconds
    ///
    /// Re-clamps the current position and rebuilds the labels. Does not
    /// notify the observer: a duration push from the playback engine is not
    /// a user-driven change.
    pub fn set_duration(&mut self, secs: f64) {
        log::debug!("set_duration: {:.1}s (was {:.1}s)", secs, self.duration);
        self.duration = secs.max(0.0);
        self.current = self.current.clamp(0.0, self.duration);
        self.elapsed_label = format_clock(self.current);
        self.remaining_label = format_clock(self.duration - self.current);
    }

    /// Apply a slider value: store it and write back the position
    ///
    /// This is the slider-to-console path: the slider's normalized value
    /// times the total duration becomes the new current position, which
    /// runs the full label-and-notify cycle of [`set_current`].
    ///
    /// [`set_current`]: Self::set_current
    pub fn set_normalized(&mut self, value: f64) {
        self.slider.set_value(value);
        self.set_current(value * self.duration);
    }

    /// Flip the play/pause flag, notify the observer, return the new state
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        let playing = self.playing;
        self.notify(|observer| observer.play_status_changed(playing));
        playing
    }

    /// Flip the fullscreen flag, notify the observer, return the new state
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        let fullscreen = self.fullscreen;
        self.notify(|observer| observer.fullscreen_status_changed(fullscreen));
        fullscreen
    }

    pub fn layout(&self) -> ConsoleLayout {
        self.layout
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn elapsed_label(&self) -> &str {
        &self.elapsed_label
    }

    pub fn remaining_label(&self) -> &str {
        &self.remaining_label
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Notification {
        Position(f64),
        Play(bool),
        Fullscreen(bool),
    }

    #[derive(Default)]
    struct Recorder {
        notifications: RefCell<Vec<Notification>>,
    }

    impl ConsoleObserver for Recorder {
        fn slider_value_changed(&self, value: f64) {
            self.notifications
                .borrow_mut()
                .push(Notification::Position(value));
        }

        fn play_status_changed(&self, playing: bool) {
            self.notifications
                .borrow_mut()
                .push(Notification::Play(playing));
        }

        fn fullscreen_status_changed(&self, fullscreen: bool) {
            self.notifications
                .borrow_mut()
                .push(Notification::Fullscreen(fullscreen));
        }
    }

    fn watched_console() -> (ConsoleState, Rc<Recorder>, Rc<dyn ConsoleObserver>) {
        let recorder = Rc::new(Recorder::default());
        let observer: Rc<dyn ConsoleObserver> = recorder.clone();
        let mut console = ConsoleState::new();
        console.set_observer(&observer);
        (console, recorder, observer)
    }

    #[test]
    fn starts_with_zeroed_labels() {
        let console = ConsoleState::new();
        assert_eq!(console.duration(), 3600.0);
        assert_eq!(console.current(), 0.0);
        assert!(!console.is_playing());
        assert!(!console.is_fullscreen());
        assert_eq!(console.elapsed_label(), "00:00:00");
        assert_eq!(console.remaining_label(), "00:00:00");
    }

    #[test]
    fn set_current_updates_both_labels() {
        let mut console = ConsoleState::new();
        console.set_duration(3660.0);
        console.set_current(3600.0);
        assert_eq!(console.elapsed_label(), "01:00:00");
        assert_eq!(console.remaining_label(), "00:01:00");
    }

    #[test]
    fn set_current_clamps_out_of_range_writes() {
        let mut console = ConsoleState::new();
        console.set_duration(100.0);

        console.set_current(-5.0);
        assert_eq!(console.current(), 0.0);
        assert_eq!(console.elapsed_label(), "00:00:00");
        assert_eq!(console.remaining_label(), "00:01:40");

        console.set_current(250.0);
        assert_eq!(console.current(), 100.0);
        assert_eq!(console.remaining_label(), "00:00:00");
    }

    #[test]
    fn set_current_notifies_with_applied_value() {
        let (mut console, recorder, _observer) = watched_console();
        console.set_duration(100.0);
        console.set_current(250.0);
        assert_eq!(
            *recorder.notifications.borrow(),
            vec![Notification::Position(100.0)]
        );
    }

    #[test]
    fn set_normalized_writes_back_scaled_position() {
        let mut console = ConsoleState::new();
        console.set_duration(3660.0);
        console.set_normalized(0.5);
        assert_eq!(console.current(), 1830.0);
        assert_eq!(console.slider().value(), 0.5);

        console.set_normalized(0.525);
        assert_eq!(console.current(), 0.525 * 3660.0);
    }

    #[test]
    fn toggle_play_alternates_and_notifies_each_time() {
        let (mut console, recorder, _observer) = watched_console();
        assert!(console.toggle_play());
        assert!(!console.toggle_play());
        assert!(!console.is_playing());
        assert_eq!(
            *recorder.notifications.borrow(),
            vec![Notification::Play(true), Notification::Play(false)]
        );
    }

    #[test]
    fn toggle_fullscreen_notifies_with_new_state() {
        let (mut console, recorder, _observer) = watched_console();
        assert!(console.toggle_fullscreen());
        assert!(console.is_fullscreen());
        assert_eq!(
            *recorder.notifications.borrow(),
            vec![Notification::Fullscreen(true)]
        );
    }

    #[test]
    fn notifications_are_noops_without_observer() {
        let mut console = ConsoleState::new();
        console.toggle_play();
        console.set_current(10.0);
    }

    #[test]
    fn notifications_are_noops_after_observer_dropped() {
        let mut console = ConsoleState::new();
        {
            let recorder = Rc::new(Recorder::default());
            let observer: Rc<dyn ConsoleObserver> = recorder.clone();
            console.set_observer(&observer);
        }
        console.toggle_play();
        console.set_current(10.0);
        assert!(console.is_playing());
    }

    #[test]
    fn shrinking_duration_reclamps_position_silently() {
        let (mut console, recorder, _observer) = watched_console();
        console.set_duration(100.0);
        console.set_current(50.0);
        recorder.notifications.borrow_mut().clear();

        console.set_duration(30.0);
        assert_eq!(console.current(), 30.0);
        assert_eq!(console.elapsed_label(), "00:00:30");
        assert_eq!(console.remaining_label(), "00:00:00");
        assert!(recorder.notifications.borrow().is_empty());
    }

    #[test]
    fn negative_duration_is_floored_at_zero() {
        let mut console = ConsoleState::new();
        console.set_duration(-10.0);
        assert_eq!(console.duration(), 0.0);
        assert_eq!(console.remaining_label(), "00:00:00");
    }
}
