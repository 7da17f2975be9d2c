use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::navigation::types::SwipeKind;

/// Thresholds that separate a swipe from a click or a slow drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Minimum vertical travel, in terminal rows.
    pub min_distance: u16,
    /// Longest press-to-release time that still counts as a swipe.
    pub max_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 3,
            max_duration_ms: 400,
        }
    }
}

/// What a finished pointer press turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(SwipeKind),
    /// Press and release with little travel, reported at the press position.
    Tap { column: u16, row: u16 },
    /// Too slow, or mostly horizontal.
    None,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    column: u16,
    row: u16,
    at: Instant,
}

/// Turns mouse press/release pairs into vertical swipes or taps.
#[derive(Debug, Clone)]
pub struct SwipeClassifier {
    config: SwipeConfig,
    press: Option<Press>,
}

impl SwipeClassifier {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    pub fn press(&mut self, column: u16, row: u16, now: Instant) {
        self.press = Some(Press { column, row, at: now });
    }

    pub fn release(&mut self, column: u16, row: u16, now: Instant) -> Gesture {
        let Some(press) = self.press.take() else {
            return Gesture::None;
        };

        let dy = i32::from(press.row) - i32::from(row);
        let dx = i32::from(press.column) - i32::from(column);
        let distance = i32::from(self.config.min_distance);

        if dy.abs() < distance {
            if dx.abs() < distance {
                return Gesture::Tap {
                    column: press.column,
                    row: press.row,
                };
            }
            return Gesture::None;
        }

        let elapsed = now.saturating_duration_since(press.at);
        if elapsed > Duration::from_millis(self.config.max_duration_ms) || dx.abs() > dy.abs() {
            return Gesture::None;
        }

        if dy > 0 {
            Gesture::Swipe(SwipeKind::SwipeUp)
        } else {
            Gesture::Swipe(SwipeKind::SwipeDown)
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SwipeClassifier {
        SwipeClassifier::new(SwipeConfig::default())
    }

    #[test]
    fn quick_upward_drag_is_swipe_up() {
        let t0 = Instant::now();
        let mut c = classifier();
        c.press(10, 20, t0);
        let g = c.release(10, 15, t0 + Duration::from_millis(120));
        assert_eq!(g, Gesture::Swipe(SwipeKind::SwipeUp));
        assert!(!c.is_tracking());
    }

    #[test]
    fn quick_downward_drag_is_swipe_down() {
        let t0 = Instant::now();
        let mut c = classifier();
        c.press(4, 2, t0);
        let g = c.release(5, 9, t0 + Duration::from_millis(200));
        assert_eq!(g, Gesture::Swipe(SwipeKind::SwipeDown));
    }

    #[test]
    fn short_travel_is_a_tap_at_press_position() {
        let t0 = Instant::now();
        let mut c = classifier();
        c.press(7, 8, t0);
        let g = c.release(8, 9, t0 + Duration::from_millis(50));
        assert_eq!(g, Gesture::Tap { column: 7, row: 8 });
    }

    #[test]
    fn slow_or_sideways_drag_is_ignored() {
        let t0 = Instant::now();
        let mut c = classifier();
        c.press(0, 20, t0);
        assert_eq!(c.release(0, 10, t0 + Duration::from_millis(900)), Gesture::None);

        c.press(0, 10, t0);
        assert_eq!(c.release(30, 5, t0 + Duration::from_millis(100)), Gesture::None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut c = classifier();
        assert_eq!(c.release(1, 1, Instant::now()), Gesture::None);
    }
}
