//! Continuous auto-scrolling strip engine.
//!
//! Everything in here is plain data and arithmetic: the DOM side lives in
//! `components::logo_loop`, which feeds measurements, pointer/wheel input
//! and frame timestamps into a [`MarqueeEngine`] and writes back the
//! translation it returns.

pub mod arbiter;
pub mod driver;
pub mod measure;
pub mod offset;
pub mod velocity;

use serde::Deserialize;

pub use arbiter::{ArbiterState, InteractionArbiter, ResumeTicket};
pub use driver::MarqueeEngine;
pub use measure::Measurement;
pub use offset::OffsetTracker;
pub use velocity::VelocityBlender;

/// Smoothing time constant for velocity changes, in seconds.
pub const SMOOTH_TAU: f64 = 0.25;
/// Fewest copies of the sequence ever rendered.
pub const MIN_COPIES: usize = 2;
/// Copies rendered beyond what the container needs to look full.
pub const COPY_HEADROOM: usize = 2;
/// Quiet period after the last drag or wheel input before auto-scroll resumes.
pub const RESUME_DELAY_MS: u32 = 600;
/// Upper bound on a single frame step, in seconds.
pub const MAX_FRAME_DT: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeConfig {
    /// Pixels per second. A negative speed reverses `direction`.
    pub speed: f64,
    pub direction: Direction,
    pub pause_on_hover: bool,
    pub draggable: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: 120.0,
            direction: Direction::Left,
            pause_on_hover: true,
            draggable: true,
        }
    }
}

impl MarqueeConfig {
    /// Signed auto-scroll velocity. Positive values grow the offset, which
    /// moves content to the left.
    pub fn target_velocity(&self) -> f64 {
        let direction = match self.direction {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
        };
        let sign = if self.speed < 0.0 { -1.0 } else { 1.0 };
        self.speed.abs() * direction * sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_scrolls_forward() {
        let config = MarqueeConfig { speed: 50.0, ..MarqueeConfig::default() };
        assert_eq!(config.target_velocity(), 50.0);
    }

    #[test]
    fn right_and_negative_speed_cancel_out() {
        let right = MarqueeConfig {
            speed: 50.0,
            direction: Direction::Right,
            ..MarqueeConfig::default()
        };
        assert_eq!(right.target_velocity(), -50.0);

        let reversed = MarqueeConfig { speed: -50.0, ..right };
        assert_eq!(reversed.target_velocity(), 50.0);
    }

    #[test]
    fn direction_deserializes_lowercase() {
        let direction: Direction = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(direction, Direction::Right);
    }
}
