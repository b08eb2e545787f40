//! Result emission: normalization combined with classification.

use effmap_core::{normalize, Category, CountMap, EfficiencyRecord};
use effmap_geometry::{Classification, SubsystemClassifier};

/// Builds emitted records from a closed count map.
///
/// Each channel is normalized against the category maximum and classified;
/// unclassified channels are skipped (their raw counts stay in the map).
/// Records come out ordered by channel id, following the count-map
/// iteration guarantee.
pub struct ResultEmitter<'a> {
    classifier: &'a SubsystemClassifier,
}

impl<'a> ResultEmitter<'a> {
    /// Creates an emitter over `classifier`.
    #[must_use]
    pub fn new(classifier: &'a SubsystemClassifier) -> Self {
        Self { classifier }
    }

    /// Emits one record per classified channel of `category`.
    ///
    /// An empty count map, or one whose channels all fail classification,
    /// yields an empty vector; neither is an error.
    #[must_use]
    pub fn emit(&self, category: Category, counts: &CountMap) -> Vec<EfficiencyRecord> {
        normalize(counts)
            .into_iter()
            .filter_map(
                |(id, ratio)| match self.classifier.classify(category, &id) {
                    Classification::Classified { tag, position } => {
                        Some(EfficiencyRecord::new(tag, position, ratio))
                    }
                    Classification::Unclassified => {
                        tracing::debug!(%id, %category, "channel matched no locator, skipping emission");
                        None
                    }
                },
            )
            .collect()
    }
}
