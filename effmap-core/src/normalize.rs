//! Max-based efficiency normalization of closed count maps.
#![allow(clippy::cast_precision_loss)]

use crate::accumulator::CountMap;
use crate::geomid::GeometryId;
use std::collections::BTreeMap;

/// Returns the maximum count over all channels, 0 for an empty map.
#[must_use]
pub fn category_max(counts: &CountMap) -> u64 {
    counts.values().copied().max().unwrap_or(0)
}

/// Normalizes counts into efficiency ratios relative to the category maximum.
///
/// For each channel, `ratio = count / category_max` as real-valued division.
/// An empty map yields an empty result. A zero maximum cannot occur for a
/// non-empty map (every present channel was counted at least once), but is
/// guarded anyway so no NaN ratio can ever be produced.
///
/// Ratios land in [0, 1]; every channel sharing the maximum gets exactly
/// 1.0, and ties are expected.
#[must_use]
pub fn normalize(counts: &CountMap) -> BTreeMap<GeometryId, f64> {
    let max = category_max(counts);
    if max == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(&id, &count)| (id, count as f64 / max as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use approx::assert_relative_eq;

    fn id(column: u16) -> GeometryId {
        GeometryId::new(1302, &[0, 0, column, 0])
    }

    #[test]
    fn test_reference_scenario() {
        // {A:5, B:3, C:5} -> max 5 -> {1.0, 0.6, 1.0}
        let counts: CountMap = [(id(0), 5), (id(1), 3), (id(2), 5)].into_iter().collect();
        let ratios = normalize(&counts);

        assert_eq!(category_max(&counts), 5);
        assert_eq!(ratios[&id(0)], 1.0);
        assert_relative_eq!(ratios[&id(1)], 0.6);
        assert_eq!(ratios[&id(2)], 1.0);
    }

    #[test]
    fn test_ratios_bounded_with_max_at_one() {
        let counts: CountMap = (0..20u16).map(|c| (id(c), u64::from(c) + 1)).collect();
        let ratios = normalize(&counts);

        assert!(ratios.values().all(|r| (0.0..=1.0).contains(r)));
        assert!(ratios.values().any(|&r| r == 1.0));
    }

    #[test]
    fn test_ratio_times_max_recovers_count() {
        let counts: CountMap = [(id(0), 7), (id(1), 11), (id(2), 13)].into_iter().collect();
        let max = category_max(&counts);
        for (channel, ratio) in normalize(&counts) {
            assert_relative_eq!(ratio * max as f64, counts[&channel] as f64);
        }
    }

    #[test]
    fn test_empty_map_yields_empty_result() {
        let counts = CountMap::new();
        assert_eq!(category_max(&counts), 0);
        assert!(normalize(&counts).is_empty());
    }

    #[test]
    fn test_zero_max_guard_produces_no_nan() {
        // Cannot arise through HitAccumulator, but must never divide by zero.
        let counts: CountMap = [(id(0), 0)].into_iter().collect();
        assert!(normalize(&counts).is_empty());
    }
}
