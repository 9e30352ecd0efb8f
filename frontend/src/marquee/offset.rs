/// Wraps `value` into `[0, width)`. Works for negative values and for
/// deltas many widths long.
pub fn wrap(value: f64, width: f64) -> f64 {
    if !(width > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = ((value % width) + width) % width;
    // -tiny % w + w rounds to exactly w
    if wrapped >= width {
        0.0
    } else {
        wrapped
    }
}

/// Scroll position within one sequence width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetTracker {
    offset: f64,
    width: f64,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Adopts a new sequence width, re-normalizing the current offset.
    pub fn set_width(&mut self, width: f64) {
        self.width = if width.is_finite() && width > 0.0 { width } else { 0.0 };
        self.offset = wrap(self.offset, self.width);
    }

    /// Moves by `delta` pixels. A no-op until a width is known.
    pub fn advance(&mut self, delta: f64) {
        if self.width <= 0.0 || !delta.is_finite() {
            return;
        }
        self.offset = wrap(self.offset + delta, self.width);
    }

    /// Horizontal translation for the track.
    pub fn translate_x(&self) -> f64 {
        if self.offset == 0.0 {
            0.0
        } else {
            -self.offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(tracker: &OffsetTracker) -> bool {
        tracker.offset() >= 0.0 && tracker.offset() < tracker.width()
    }

    #[test]
    fn mixed_deltas_stay_in_range() {
        let mut tracker = OffsetTracker::new();
        tracker.set_width(1000.0);
        let deltas = [
            120.0, -5000.0, 999.999, -0.0001, 1e9, -1e9, 1000.0, -1000.0, 0.5, -1e-12,
        ];
        for delta in deltas {
            tracker.advance(delta);
            assert!(in_range(&tracker), "offset {} after {}", tracker.offset(), delta);
        }
    }

    #[test]
    fn negative_delta_wraps_to_tail() {
        let mut tracker = OffsetTracker::new();
        tracker.set_width(400.0);
        tracker.advance(-50.0);
        assert_eq!(tracker.offset(), 350.0);
        assert_eq!(tracker.translate_x(), -350.0);
    }

    #[test]
    fn shrinking_width_renormalizes() {
        let mut tracker = OffsetTracker::new();
        tracker.set_width(1000.0);
        tracker.advance(900.0);
        tracker.set_width(300.0);
        assert_eq!(tracker.offset(), 0.0);
        tracker.set_width(250.0);
        tracker.advance(260.0);
        assert_eq!(tracker.offset(), 10.0);
    }

    #[test]
    fn ignores_input_without_width() {
        let mut tracker = OffsetTracker::new();
        tracker.advance(42.0);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn wrap_handles_degenerate_input() {
        assert_eq!(wrap(f64::NAN, 100.0), 0.0);
        assert_eq!(wrap(10.0, 0.0), 0.0);
        assert_eq!(wrap(-1e-20, 100.0), 0.0);
    }
}
