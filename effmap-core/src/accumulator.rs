//! Per-channel hit counting with an explicit open/closed lifecycle.

use crate::channel::Category;
use crate::error::{Error, Result};
use crate::geomid::GeometryId;
use std::collections::BTreeMap;

/// Count map for one category.
///
/// Keys are unique channel ids; iteration follows the total order on
/// [`GeometryId`], so downstream emission over a snapshot is deterministic.
pub type CountMap = BTreeMap<GeometryId, u64>;

/// Accumulation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting `record` calls.
    Open,
    /// Terminal: counts are frozen, snapshots available.
    Closed,
}

/// Accumulates hit occurrence counts per channel, one map per category.
///
/// The accumulator starts [`Phase::Open`], takes one increment per observed
/// hit, and is closed exactly once at teardown. Counts are mutated only
/// while open and become read-only after [`HitAccumulator::close`]; there
/// is no reopening.
#[derive(Debug, Default)]
pub struct HitAccumulator {
    closed: bool,
    calorimeter: CountMap,
    drift_cells: CountMap,
}

impl HitAccumulator {
    /// Creates an open accumulator with empty count maps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.closed {
            Phase::Closed
        } else {
            Phase::Open
        }
    }

    /// Returns true once [`HitAccumulator::close`] has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Records one hit on `id`, initializing its count to 1 if absent.
    ///
    /// # Errors
    /// [`Error::AccumulatorClosed`] if called after [`HitAccumulator::close`];
    /// that is a lifecycle violation, not a recoverable condition.
    pub fn record(&mut self, category: Category, id: GeometryId) -> Result<()> {
        if self.closed {
            return Err(Error::AccumulatorClosed { id });
        }
        *self.map_mut(category).entry(id).or_insert(0) += 1;
        Ok(())
    }

    /// Transitions Open to Closed. Idempotent: later calls are no-ops and
    /// must not re-trigger any downstream computation.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Returns the frozen count map for `category`.
    ///
    /// # Errors
    /// [`Error::AccumulatorOpen`] if the accumulator has not been closed.
    pub fn snapshot(&self, category: Category) -> Result<&CountMap> {
        if !self.closed {
            return Err(Error::AccumulatorOpen);
        }
        Ok(self.map(category))
    }

    fn map(&self, category: Category) -> &CountMap {
        match category {
            Category::Calorimeter => &self.calorimeter,
            Category::DriftCell => &self.drift_cells,
        }
    }

    fn map_mut(&mut self, category: Category) -> &mut CountMap {
        match category {
            Category::Calorimeter => &mut self.calorimeter,
            Category::DriftCell => &mut self.drift_cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calo_id(column: u16) -> GeometryId {
        GeometryId::new(1302, &[0, 0, column, 0])
    }

    fn cell_id(row: u16) -> GeometryId {
        GeometryId::new(1204, &[0, 0, 2, row])
    }

    #[test]
    fn test_counts_match_record_calls() {
        let mut acc = HitAccumulator::new();
        for _ in 0..5 {
            acc.record(Category::Calorimeter, calo_id(1)).unwrap();
        }
        for _ in 0..3 {
            acc.record(Category::Calorimeter, calo_id(2)).unwrap();
        }
        acc.record(Category::DriftCell, cell_id(9)).unwrap();
        acc.close();

        let calo = acc.snapshot(Category::Calorimeter).unwrap();
        assert_eq!(calo.get(&calo_id(1)), Some(&5));
        assert_eq!(calo.get(&calo_id(2)), Some(&3));

        let cells = acc.snapshot(Category::DriftCell).unwrap();
        assert_eq!(cells.get(&cell_id(9)), Some(&1));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_categories_do_not_share_counts() {
        // Same address path under two kinds stays two distinct channels.
        let mut acc = HitAccumulator::new();
        acc.record(Category::Calorimeter, calo_id(4)).unwrap();
        acc.record(Category::DriftCell, cell_id(4)).unwrap();
        acc.close();

        assert_eq!(acc.snapshot(Category::Calorimeter).unwrap().len(), 1);
        assert_eq!(acc.snapshot(Category::DriftCell).unwrap().len(), 1);
    }

    #[test]
    fn test_record_after_close_is_rejected() {
        let mut acc = HitAccumulator::new();
        acc.record(Category::Calorimeter, calo_id(0)).unwrap();
        acc.close();

        let err = acc.record(Category::Calorimeter, calo_id(0)).unwrap_err();
        assert!(matches!(err, Error::AccumulatorClosed { .. }));
        // Rejected call left the counts untouched.
        assert_eq!(
            acc.snapshot(Category::Calorimeter).unwrap().get(&calo_id(0)),
            Some(&1)
        );
    }

    #[test]
    fn test_snapshot_before_close_is_rejected() {
        let acc = HitAccumulator::new();
        assert!(matches!(
            acc.snapshot(Category::Calorimeter),
            Err(Error::AccumulatorOpen)
        ));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut acc = HitAccumulator::new();
        acc.record(Category::DriftCell, cell_id(1)).unwrap();
        acc.close();
        let first = acc.snapshot(Category::DriftCell).unwrap().clone();

        acc.close();
        assert_eq!(acc.snapshot(Category::DriftCell).unwrap(), &first);
        assert_eq!(acc.phase(), Phase::Closed);
    }
}
