//! Fixed-priority subsystem classification.

use crate::locator::Locator;
use effmap_core::{Category, GeometryId, Position, SubsystemTag};
use std::sync::Arc;

/// Outcome of classifying one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// The channel belongs to a subsystem.
    Classified {
        /// Matching subsystem.
        tag: SubsystemTag,
        /// Reference position supplied by the matching locator.
        position: Position,
    },
    /// No locator claimed the channel. Not an error: the caller skips
    /// emission for this id and keeps its raw count.
    Unclassified,
}

/// Classifies channels by querying locators in fixed priority order.
///
/// Calorimeter ids are tested against the main-wall, x-wall and gamma-veto
/// locators in that order; drift-cell ids against the single drift-cell
/// locator. Locators are expected to partition their category's id space,
/// so the priority order is a defensive tie-break only.
///
/// The classifier holds shared references to the locators for the duration
/// of a processing session; it takes no ownership of geometry state.
pub struct SubsystemClassifier {
    calorimeter_chain: Vec<Arc<dyn Locator>>,
    drift_cells: Arc<dyn Locator>,
}

impl SubsystemClassifier {
    /// Creates a classifier from an ordered calorimeter locator chain and
    /// the drift-cell locator.
    #[must_use]
    pub fn new(calorimeter_chain: Vec<Arc<dyn Locator>>, drift_cells: Arc<dyn Locator>) -> Self {
        Self {
            calorimeter_chain,
            drift_cells,
        }
    }

    /// Resolves the subsystem and reference position of `id`.
    #[must_use]
    pub fn classify(&self, category: Category, id: &GeometryId) -> Classification {
        match category {
            Category::Calorimeter => self
                .calorimeter_chain
                .iter()
                .find(|locator| locator.contains(id))
                .and_then(|locator| {
                    locator
                        .position_of(id)
                        .map(|position| (locator.subsystem(), position))
                }),
            Category::DriftCell => {
                if self.drift_cells.contains(id) {
                    self.drift_cells
                        .position_of(id)
                        .map(|position| (self.drift_cells.subsystem(), position))
                } else {
                    None
                }
            }
        }
        .map_or(Classification::Unclassified, |(tag, position)| {
            Classification::Classified { tag, position }
        })
    }
}
