use super::{COPY_HEADROOM, MIN_COPIES};

/// Result of one layout pass over the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Width of one sequence copy, rounded up to whole pixels.
    pub sequence_width: f64,
    pub copy_count: usize,
}

/// How many side-by-side copies keep a container of `container_width`
/// covered while the strip scrolls by up to one sequence width.
pub fn copies_needed(container_width: f64, sequence_width: f64) -> usize {
    if !(sequence_width > 0.0) {
        return MIN_COPIES;
    }
    let container_width = if container_width.is_finite() {
        container_width.max(0.0)
    } else {
        0.0
    };
    let fit = (container_width / sequence_width).ceil() as usize;
    (fit + COPY_HEADROOM).max(MIN_COPIES)
}

/// Turns raw layout numbers into a measurement.
///
/// Returns `None` while the sequence has no positive width yet (not laid
/// out, images still loading); callers keep the strip idle until a later
/// pass succeeds.
pub fn measure(container_width: f64, raw_sequence_width: f64) -> Option<Measurement> {
    if !raw_sequence_width.is_finite() || raw_sequence_width <= 0.0 {
        return None;
    }
    Some(Measurement {
        sequence_width: raw_sequence_width.ceil(),
        copy_count: copies_needed(container_width, raw_sequence_width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_container_needs_headroom() {
        let m = measure(2500.0, 1000.0).unwrap();
        assert_eq!(m.copy_count, 5);
        assert_eq!(m.sequence_width, 1000.0);
    }

    #[test]
    fn never_fewer_than_min_copies() {
        assert_eq!(copies_needed(0.0, 1000.0), MIN_COPIES.max(COPY_HEADROOM));
        assert!(copies_needed(10.0, 5000.0) >= MIN_COPIES);
    }

    #[test]
    fn zero_width_is_not_ready() {
        assert_eq!(measure(1200.0, 0.0), None);
        assert_eq!(measure(1200.0, -3.0), None);
        assert_eq!(measure(1200.0, f64::NAN), None);
    }

    #[test]
    fn fractional_width_rounds_up() {
        let m = measure(800.0, 640.2).unwrap();
        assert_eq!(m.sequence_width, 641.0);
        assert_eq!(m.copy_count, 4);
    }

    #[test]
    fn measuring_twice_is_stable() {
        let first = measure(1366.0, 712.5);
        let second = measure(1366.0, 712.5);
        assert_eq!(first, second);
    }
}
