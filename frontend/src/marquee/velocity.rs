use super::{MAX_FRAME_DT, SMOOTH_TAU};

/// Clamps a frame step in seconds to `[0, MAX_FRAME_DT]`. Backgrounded tabs
/// deliver huge gaps between frames; those would otherwise teleport the strip.
pub fn clamp_frame_dt(dt: f64) -> f64 {
    if !dt.is_finite() || dt <= 0.0 {
        0.0
    } else {
        dt.min(MAX_FRAME_DT)
    }
}

/// Fraction of the remaining gap closed by a first-order low-pass filter
/// over `dt` seconds.
pub fn easing_factor(dt: f64, tau: f64) -> f64 {
    1.0 - (-dt / tau).exp()
}

/// Exponentially smoothed scroll velocity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VelocityBlender {
    current: f64,
}

impl VelocityBlender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Moves the current velocity toward `target`. `catch_up` halves the
    /// time constant, used for the first frame after an interaction ends.
    pub fn blend(&mut self, target: f64, dt: f64, catch_up: bool) -> f64 {
        let tau = if catch_up { SMOOTH_TAU * 0.5 } else { SMOOTH_TAU };
        self.current += (target - self.current) * easing_factor(dt, tau);
        self.current
    }

    /// Stops dead. Only used while the user holds the strip.
    pub fn halt(&mut self) {
        self.current = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_within_two_seconds() {
        let mut blender = VelocityBlender::new();
        let dt = 1.0 / 60.0;
        for _ in 0..120 {
            blender.blend(50.0, dt, false);
        }
        assert!((blender.current() - 50.0).abs() < 0.5);
    }

    #[test]
    fn single_large_step_matches_closed_form() {
        let mut blender = VelocityBlender::new();
        blender.blend(50.0, 2.0, false);
        let expected = 50.0 * (1.0 - (-8.0f64).exp());
        assert!((blender.current() - expected).abs() < 1e-9);
        assert!(blender.current() > 49.5);
    }

    #[test]
    fn catch_up_closes_more_of_the_gap() {
        let mut normal = VelocityBlender::new();
        let mut fast = VelocityBlender::new();
        normal.blend(80.0, SMOOTH_TAU / 2.0, false);
        fast.blend(80.0, SMOOTH_TAU / 2.0, true);
        assert!((80.0 - fast.current()).abs() < (80.0 - normal.current()).abs());
    }

    #[test]
    fn never_overshoots() {
        let mut blender = VelocityBlender::new();
        for _ in 0..50 {
            blender.blend(-30.0, MAX_FRAME_DT, true);
            assert!(blender.current() >= -30.0);
        }
    }

    #[test]
    fn frame_dt_is_clamped() {
        assert_eq!(clamp_frame_dt(5.0), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f64::INFINITY), 0.0);
        assert_eq!(clamp_frame_dt(0.016), 0.016);
    }
}
