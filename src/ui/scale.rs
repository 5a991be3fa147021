//! Scales mapping data domains onto screen ranges
//!
//! Small, invertible helpers used by the scatter chart and the time
//! slider. Degenerate domains never divide by zero.

/// Linear mapping between a domain and a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.d1 == self.d0 {
            return self.r0;
        }
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn invert(&self, pos: f64) -> f64 {
        if self.r1 == self.r0 {
            return self.d0;
        }
        self.d0 + (pos - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }
}

/// Square-root mapping, for area-proportional circle radii.
///
/// A degenerate domain (min == max) forces the lower bound to 0 so a
/// single distinct value still maps predictably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    s0: f64,
    s1: f64,
    r0: f64,
    r1: f64,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, d1) = domain;
        if d0 == d1 {
            d0 = 0.0;
        }
        Self {
            s0: d0.max(0.0).sqrt(),
            s1: d1.max(0.0).sqrt(),
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.s1 == self.s0 {
            return self.r0;
        }
        let s = value.max(0.0).sqrt();
        self.r0 + (s - self.s0) / (self.s1 - self.s0) * (self.r1 - self.r0)
    }
}

/// Maps slider progress in [0, 100] onto an epoch-millisecond extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeScale {
    min_ms: i64,
    max_ms: i64,
}

impl TimeScale {
    pub fn from_extent(min_ms: i64, max_ms: i64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: max_ms.max(min_ms),
        }
    }

    /// Cutoff timestamp for a progress value (clamped to [0, 100]).
    pub fn to_timestamp(&self, progress: f64) -> i64 {
        let progress = progress.clamp(0.0, 100.0);
        if self.max_ms == self.min_ms {
            return self.max_ms;
        }
        let span = (self.max_ms - self.min_ms) as f64;
        self.min_ms + (span * progress / 100.0).round() as i64
    }

    /// Progress value for a timestamp (clamped to the extent).
    pub fn to_progress(&self, timestamp_ms: i64) -> f64 {
        if self.max_ms == self.min_ms {
            return 100.0;
        }
        let span = (self.max_ms - self.min_ms) as f64;
        (((timestamp_ms - self.min_ms) as f64) / span * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_and_inverts() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert!((scale.apply(5.0) - 150.0).abs() < 1e-9);
        assert!((scale.invert(150.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn linear_handles_inverted_range() {
        // Hour-of-day axis: 0 at the bottom row, 24 at the top row.
        let scale = LinearScale::new((0.0, 24.0), (23.0, 0.0));
        assert!((scale.apply(0.0) - 23.0).abs() < 1e-9);
        assert!((scale.apply(24.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn linear_degenerate_domain_pins_to_range_start() {
        let scale = LinearScale::new((7.0, 7.0), (0.0, 50.0));
        assert_eq!(scale.apply(7.0), 0.0);
        assert_eq!(scale.apply(1000.0), 0.0);
    }

    #[test]
    fn sqrt_is_area_proportional() {
        let scale = SqrtScale::new((0.0, 100.0), (0.0, 10.0));
        assert!((scale.apply(25.0) - 5.0).abs() < 1e-9);
        assert!((scale.apply(100.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_degenerate_domain_lowers_to_zero() {
        // A single distinct value maps to the top of the range, not r0.
        let scale = SqrtScale::new((9.0, 9.0), (2.0, 30.0));
        assert!((scale.apply(9.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn time_scale_round_trips_progress() {
        let scale = TimeScale::from_extent(1_000, 101_000);
        assert_eq!(scale.to_timestamp(0.0), 1_000);
        assert_eq!(scale.to_timestamp(100.0), 101_000);
        assert_eq!(scale.to_timestamp(50.0), 51_000);
        assert!((scale.to_progress(51_000) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn time_scale_clamps_out_of_range_input() {
        let scale = TimeScale::from_extent(0, 1_000);
        assert_eq!(scale.to_timestamp(-5.0), 0);
        assert_eq!(scale.to_timestamp(400.0), 1_000);
        assert_eq!(scale.to_progress(-50), 0.0);
        assert_eq!(scale.to_progress(9_999), 100.0);
    }

    #[test]
    fn time_scale_single_instant() {
        let scale = TimeScale::from_extent(500, 500);
        assert_eq!(scale.to_timestamp(0.0), 500);
        assert_eq!(scale.to_progress(500), 100.0);
    }
}
