//! Slider state
//!
//! Pure data consumed by the slider canvas program. The stored value is the
//! authoritative playback position; the *displayed* value trails it through
//! a short linear transition so the fill and handle glide instead of
//! jumping.

use std::time::Instant;

use crate::theme::VALUE_TRANSITION;

/// A running transition from a previous displayed value
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f64,
    started: Instant,
}

/// State for the progress slider
///
/// `value` is normalized: 0.0 is the start of the track, 1.0 the end.
/// Setting it does not clamp; callers pass values already in range (the
/// pointer mapping in the canvas clamps before publishing).
#[derive(Debug, Clone)]
pub struct SliderState {
    value: f64,
    transition: Option<Transition>,
}

impl SliderState {
    pub fn new() -> Self {
        Self {
            value: 0.5,
            transition: None,
        }
    }

    /// The authoritative normalized value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store a new value and start a visual transition toward it
    ///
    /// The transition begins at whatever value is currently displayed, so a
    /// rapid burst of updates (e.g. a drag) stays smooth rather than
    /// restarting from the last settled value each time.
    pub fn set_value(&mut self, value: f64) {
        let now = Instant::now();
        self.transition = Some(Transition {
            from: self.displayed(now),
            started: now,
        });
        self.value = value;
    }

    /// The value shown by the track fill and handle at `now`
    ///
    /// Interpolates linearly over [`VALUE_TRANSITION`]; once the transition
    /// has elapsed this is exactly `value()`.
    pub fn displayed(&self, now: Instant) -> f64 {
        match self.transition {
            Some(transition) => {
                let elapsed = now.saturating_duration_since(transition.started);
                let progress = elapsed.as_secs_f64() / VALUE_TRANSITION.as_secs_f64();
                if progress >= 1.0 {
                    self.value
                } else {
                    transition.from + (self.value - transition.from) * progress
                }
            }
            None => self.value,
        }
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_at_midpoint() {
        let state = SliderState::new();
        assert_eq!(state.value(), 0.5);
        assert_eq!(state.displayed(Instant::now()), 0.5);
    }

    #[test]
    fn set_value_is_immediate() {
        let mut state = SliderState::new();
        state.set_value(0.8);
        assert_eq!(state.value(), 0.8);
    }

    #[test]
    fn displayed_settles_after_transition() {
        let mut state = SliderState::new();
        state.set_value(1.0);
        let settled = Instant::now() + Duration::from_millis(500);
        assert_eq!(state.displayed(settled), 1.0);
    }

    #[test]
    fn displayed_starts_near_previous_value() {
        let mut state = SliderState::new();
        state.set_value(1.0);
        // Barely any time has passed, so the displayed value is still close
        // to the old 0.5 even though value() is already 1.0.
        let shown = state.displayed(Instant::now());
        assert!(shown < 0.6, "displayed jumped to {shown}");
    }

    #[test]
    fn retarget_mid_transition_continues_from_displayed() {
        let mut state = SliderState::new();
        state.set_value(1.0);
        let midway = state.displayed(Instant::now());
        state.set_value(0.0);
        // The new transition starts from wherever the fill was drawn, not
        // from the previous target.
        let shown = state.displayed(Instant::now());
        assert!((shown - midway).abs() < 0.1);
    }
}
