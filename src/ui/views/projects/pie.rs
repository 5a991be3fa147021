//! Year-bucket pie geometry
//!
//! Wedge angles are plain math, kept apart from the canvas painting so
//! wedge hit-testing and rendering can't disagree.

use std::f64::consts::TAU;

use super::YearBucket;

/// One pie wedge, as a half-open angle range in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub end: f64,
}

/// Angles for each bucket, proportional to its count.
///
/// An empty bucket list yields zero wedges.
pub fn wedges(buckets: &[YearBucket]) -> Vec<Wedge> {
    let total: usize = buckets.iter().map(|b| b.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(buckets.len());
    let mut acc = 0.0;
    for bucket in buckets {
        let sweep = bucket.count as f64 / total as f64 * TAU;
        out.push(Wedge {
            start: acc,
            end: acc + sweep,
        });
        acc += sweep;
    }
    // Close the ring exactly despite float accumulation.
    if let Some(last) = out.last_mut() {
        last.end = TAU;
    }
    out
}

/// Wedge index under an angle (radians, any range).
pub fn wedge_at(wedges: &[Wedge], angle: f64) -> Option<usize> {
    if wedges.is_empty() || !angle.is_finite() {
        return None;
    }
    let normalized = angle.rem_euclid(TAU);
    wedges
        .iter()
        .position(|w| normalized >= w.start && normalized < w.end)
        .or(Some(wedges.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(counts: &[usize]) -> Vec<YearBucket> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| YearBucket {
                year: 2020 + i as i32,
                count,
            })
            .collect()
    }

    #[test]
    fn wedges_cover_the_full_circle() {
        let wedges = wedges(&buckets(&[1, 1, 2]));
        assert_eq!(wedges.len(), 3);
        assert_eq!(wedges[0].start, 0.0);
        assert_eq!(wedges[2].end, TAU);
        // Proportional sweep: the last bucket holds half the total.
        assert!((wedges[2].end - wedges[2].start - TAU / 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_buckets_yield_zero_wedges() {
        assert!(wedges(&[]).is_empty());
    }

    #[test]
    fn hit_testing_finds_the_right_wedge() {
        let wedges = wedges(&buckets(&[1, 1]));
        assert_eq!(wedge_at(&wedges, 0.1), Some(0));
        assert_eq!(wedge_at(&wedges, TAU / 2.0 + 0.1), Some(1));
        // Negative angles wrap around.
        assert_eq!(wedge_at(&wedges, -0.1), Some(1));
    }

    #[test]
    fn hit_testing_empty_pie_misses() {
        assert_eq!(wedge_at(&[], 1.0), None);
    }
}
