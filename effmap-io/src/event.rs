//! Bank-structured event records.
//!
//! An event record is a container of named banks. The only bank family
//! this pipeline consumes is the calibrated-data bank, which exposes the
//! calorimeter and tracker hit collections; each hit carries exactly one
//! channel id plus its calibrated measurements (which the counting engine
//! ignores).

use effmap_core::GeometryId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard label of the calibrated-data bank.
pub const CALIBRATED_DATA_LABEL: &str = "CD";

/// One calibrated calorimeter hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorimeterHit {
    /// Channel the hit was observed on.
    pub id: GeometryId,
    /// Calibrated energy deposit (MeV).
    #[serde(default)]
    pub energy: f64,
    /// Calibrated hit time (ns).
    #[serde(default)]
    pub time: f64,
}

/// One calibrated tracker (drift-cell) hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerHit {
    /// Channel the hit was observed on.
    pub id: GeometryId,
    /// Calibrated drift radius (mm).
    #[serde(default)]
    pub drift_radius: f64,
    /// Longitudinal position along the anode wire (mm).
    #[serde(default)]
    pub z: f64,
}

/// Calibrated-data bank: the two hit collections of one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibratedBank {
    /// Calorimeter hits of this event.
    #[serde(default)]
    pub calorimeter_hits: Vec<CalorimeterHit>,
    /// Tracker hits of this event.
    #[serde(default)]
    pub tracker_hits: Vec<TrackerHit>,
}

impl CalibratedBank {
    /// Total number of hits across both collections.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.calorimeter_hits.len() + self.tracker_hits.len()
    }
}

/// One event record: named banks keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Banks present in this event.
    #[serde(default)]
    pub banks: BTreeMap<String, CalibratedBank>,
}

impl EventRecord {
    /// Creates an empty event record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bank stored under `label`, if present.
    #[must_use]
    pub fn bank(&self, label: &str) -> Option<&CalibratedBank> {
        self.banks.get(label)
    }

    /// Stores `bank` under `label`, replacing any previous content.
    pub fn insert_bank(&mut self, label: impl Into<String>, bank: CalibratedBank) {
        self.banks.insert(label.into(), bank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_lookup() {
        let mut event = EventRecord::new();
        assert!(event.bank(CALIBRATED_DATA_LABEL).is_none());

        event.insert_bank(CALIBRATED_DATA_LABEL, CalibratedBank::default());
        assert!(event.bank(CALIBRATED_DATA_LABEL).is_some());
        assert!(event.bank("SD").is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"{
            "banks": {
                "CD": {
                    "calorimeter_hits": [
                        {"id": {"kind": 1302, "addr": [0, 0, 3, 7]}, "energy": 1.2, "time": 4.5}
                    ],
                    "tracker_hits": [
                        {"id": {"kind": 1204, "addr": [0, 1, 2, 56]}, "drift_radius": 11.0}
                    ]
                }
            }
        }"#;

        let event: EventRecord = serde_json::from_str(json).unwrap();
        let bank = event.bank(CALIBRATED_DATA_LABEL).unwrap();
        assert_eq!(bank.hit_count(), 2);
        assert_eq!(bank.calorimeter_hits[0].id, GeometryId::new(1302, &[0, 0, 3, 7]));
        assert!((bank.tracker_hits[0].drift_radius - 11.0).abs() < f64::EPSILON);
        // Omitted calibrated fields default to zero.
        assert!((bank.tracker_hits[0].z).abs() < f64::EPSILON);
    }

    #[test]
    fn test_over_deep_id_is_a_parse_error() {
        let json = r#"{"id": {"kind": 1, "addr": [1, 2, 3, 4, 5, 6]}}"#;
        assert!(serde_json::from_str::<CalorimeterHit>(json).is_err());
    }
}
