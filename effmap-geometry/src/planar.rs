//! Planar demonstrator-module geometry.
//!
//! Concrete locators for a one-module tracker–calorimeter layout: two main
//! calorimeter walls closing the tracking chamber in x, x-wall blocks
//! closing it in y, gamma-veto rows above and below, and the drift-cell
//! array between the main walls. Positions are block/cell centers in mm,
//! derived from the address path by plain grid arithmetic.

use crate::classifier::SubsystemClassifier;
use crate::locator::Locator;
use effmap_core::{GeometryId, Position, SubsystemTag};
use std::sync::Arc;

/// Channel-family kind codes used by the demonstrator addressing scheme.
pub mod kind {
    /// Main-wall calorimeter block.
    pub const CALO_BLOCK: u16 = 1302;
    /// X-wall calorimeter block.
    pub const XCALO_BLOCK: u16 = 1232;
    /// Gamma-veto calorimeter block.
    pub const GVETO_BLOCK: u16 = 1252;
    /// Drift cell of the gas tracker.
    pub const DRIFT_CELL: u16 = 1204;
}

/// Maps a side index (0 or 1) to the sign of the corresponding half-space.
fn half_sign(side: u16) -> f64 {
    if side == 0 {
        -1.0
    } else {
        1.0
    }
}

/// Centers `index` on a grid of `len` slots with the given pitch.
fn centered(index: u16, len: u16, pitch: f64) -> f64 {
    (f64::from(index) - f64::from(len - 1) / 2.0) * pitch
}

/// Locator for the two main calorimeter walls.
///
/// Address path: module / side / column / row.
#[derive(Debug, Clone)]
pub struct MainWallLocator {
    module: u16,
    columns: u16,
    rows: u16,
    wall_x: f64,
    pitch: f64,
}

impl MainWallLocator {
    /// Demonstrator main walls: 20 columns by 13 rows per side.
    #[must_use]
    pub fn new(module: u16) -> Self {
        Self {
            module,
            columns: 20,
            rows: 13,
            wall_x: 435.0,
            pitch: 259.0,
        }
    }
}

impl Locator for MainWallLocator {
    fn subsystem(&self) -> SubsystemTag {
        SubsystemTag::MainWallCalo
    }

    fn contains(&self, id: &GeometryId) -> bool {
        id.kind() == kind::CALO_BLOCK
            && id.depth() == 4
            && id.level(0) == Some(self.module)
            && id.level(1).is_some_and(|side| side < 2)
            && id.level(2).is_some_and(|column| column < self.columns)
            && id.level(3).is_some_and(|row| row < self.rows)
    }

    fn position_of(&self, id: &GeometryId) -> Option<Position> {
        if !self.contains(id) {
            return None;
        }
        let side = id.level(1)?;
        let column = id.level(2)?;
        let row = id.level(3)?;
        Some(Position::block(
            half_sign(side) * self.wall_x,
            centered(column, self.columns, self.pitch),
            centered(row, self.rows, self.pitch),
        ))
    }
}

/// Locator for the x-wall calorimeter blocks closing the chamber in y.
///
/// Address path: module / side / wall / column / row.
#[derive(Debug, Clone)]
pub struct XWallLocator {
    module: u16,
    columns: u16,
    rows: u16,
    wall_y: f64,
    pitch: f64,
}

impl XWallLocator {
    /// Demonstrator x-walls: 2 columns by 16 rows per wall corner.
    #[must_use]
    pub fn new(module: u16) -> Self {
        Self {
            module,
            columns: 2,
            rows: 16,
            wall_y: 2505.0,
            pitch: 212.0,
        }
    }
}

impl Locator for XWallLocator {
    fn subsystem(&self) -> SubsystemTag {
        SubsystemTag::XWallCalo
    }

    fn contains(&self, id: &GeometryId) -> bool {
        id.kind() == kind::XCALO_BLOCK
            && id.depth() == 5
            && id.level(0) == Some(self.module)
            && id.level(1).is_some_and(|side| side < 2)
            && id.level(2).is_some_and(|wall| wall < 2)
            && id.level(3).is_some_and(|column| column < self.columns)
            && id.level(4).is_some_and(|row| row < self.rows)
    }

    fn position_of(&self, id: &GeometryId) -> Option<Position> {
        if !self.contains(id) {
            return None;
        }
        let side = id.level(1)?;
        let wall = id.level(2)?;
        let column = id.level(3)?;
        let row = id.level(4)?;
        Some(Position::block(
            half_sign(side) * (f64::from(column) + 0.5) * self.pitch,
            half_sign(wall) * self.wall_y,
            centered(row, self.rows, self.pitch),
        ))
    }
}

/// Locator for the gamma-veto rows above and below the chamber.
///
/// Address path: module / side / wall / column.
#[derive(Debug, Clone)]
pub struct GammaVetoLocator {
    module: u16,
    columns: u16,
    offset_x: f64,
    wall_z: f64,
    pitch: f64,
}

impl GammaVetoLocator {
    /// Demonstrator gamma veto: 16 columns per top/bottom wall and side.
    #[must_use]
    pub fn new(module: u16) -> Self {
        Self {
            module,
            columns: 16,
            offset_x: 290.0,
            wall_z: 1625.0,
            pitch: 311.5,
        }
    }
}

impl Locator for GammaVetoLocator {
    fn subsystem(&self) -> SubsystemTag {
        SubsystemTag::GammaVetoCalo
    }

    fn contains(&self, id: &GeometryId) -> bool {
        id.kind() == kind::GVETO_BLOCK
            && id.depth() == 4
            && id.level(0) == Some(self.module)
            && id.level(1).is_some_and(|side| side < 2)
            && id.level(2).is_some_and(|wall| wall < 2)
            && id.level(3).is_some_and(|column| column < self.columns)
    }

    fn position_of(&self, id: &GeometryId) -> Option<Position> {
        if !self.contains(id) {
            return None;
        }
        let side = id.level(1)?;
        let wall = id.level(2)?;
        let column = id.level(3)?;
        Some(Position::block(
            half_sign(side) * self.offset_x,
            centered(column, self.columns, self.pitch),
            half_sign(wall) * self.wall_z,
        ))
    }
}

/// Locator for the drift-cell array of the gas tracker.
///
/// Address path: module / side / layer / row. Cells are located in the
/// horizontal plane only, so the reference position is 2D.
#[derive(Debug, Clone)]
pub struct DriftCellLocator {
    module: u16,
    layers: u16,
    rows: u16,
    first_layer_x: f64,
    pitch: f64,
}

impl DriftCellLocator {
    /// Demonstrator tracker: 9 layers by 113 rows per side, 44 mm cells.
    #[must_use]
    pub fn new(module: u16) -> Self {
        Self {
            module,
            layers: 9,
            rows: 113,
            first_layer_x: 30.6,
            pitch: 44.0,
        }
    }
}

impl Locator for DriftCellLocator {
    fn subsystem(&self) -> SubsystemTag {
        SubsystemTag::DriftCell
    }

    fn contains(&self, id: &GeometryId) -> bool {
        id.kind() == kind::DRIFT_CELL
            && id.depth() == 4
            && id.level(0) == Some(self.module)
            && id.level(1).is_some_and(|side| side < 2)
            && id.level(2).is_some_and(|layer| layer < self.layers)
            && id.level(3).is_some_and(|row| row < self.rows)
    }

    fn position_of(&self, id: &GeometryId) -> Option<Position> {
        if !self.contains(id) {
            return None;
        }
        let side = id.level(1)?;
        let layer = id.level(2)?;
        let row = id.level(3)?;
        Some(Position::cell(
            half_sign(side) * (self.first_layer_x + f64::from(layer) * self.pitch),
            centered(row, self.rows, self.pitch),
        ))
    }
}

/// The four locators of one detector module.
///
/// Owns the locator set for a processing session and hands out shared
/// references; the demonstrator constructor wires the standard layout.
pub struct DetectorModel {
    main_wall: Arc<dyn Locator>,
    x_wall: Arc<dyn Locator>,
    gamma_veto: Arc<dyn Locator>,
    drift_cells: Arc<dyn Locator>,
}

impl DetectorModel {
    /// Builds the demonstrator layout for `module`.
    #[must_use]
    pub fn demonstrator(module: u16) -> Self {
        Self {
            main_wall: Arc::new(MainWallLocator::new(module)),
            x_wall: Arc::new(XWallLocator::new(module)),
            gamma_veto: Arc::new(GammaVetoLocator::new(module)),
            drift_cells: Arc::new(DriftCellLocator::new(module)),
        }
    }

    /// Assembles a model from externally built locators (fakes in tests,
    /// alternative layouts otherwise).
    #[must_use]
    pub fn from_locators(
        main_wall: Arc<dyn Locator>,
        x_wall: Arc<dyn Locator>,
        gamma_veto: Arc<dyn Locator>,
        drift_cells: Arc<dyn Locator>,
    ) -> Self {
        Self {
            main_wall,
            x_wall,
            gamma_veto,
            drift_cells,
        }
    }

    /// Builds a classifier over this model's locators, calorimeter chain
    /// in priority order: main wall, x-wall, gamma veto.
    #[must_use]
    pub fn classifier(&self) -> SubsystemClassifier {
        SubsystemClassifier::new(
            vec![
                Arc::clone(&self.main_wall),
                Arc::clone(&self.x_wall),
                Arc::clone(&self.gamma_veto),
            ],
            Arc::clone(&self.drift_cells),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classification;
    use approx::assert_relative_eq;
    use effmap_core::Category;

    #[test]
    fn test_main_wall_membership_and_position() {
        let locator = MainWallLocator::new(0);
        let id = GeometryId::new(kind::CALO_BLOCK, &[0, 1, 9, 6]);
        assert!(locator.contains(&id));

        let position = locator.position_of(&id).unwrap();
        assert_relative_eq!(position.x(), 435.0);
        // Column 9 of 20 sits half a pitch below center.
        assert_relative_eq!(position.y(), -0.5 * 259.0);
        assert_relative_eq!(position.z().unwrap(), 0.0);
    }

    #[test]
    fn test_main_wall_rejects_out_of_range() {
        let locator = MainWallLocator::new(0);
        // Column past the wall edge.
        assert!(!locator.contains(&GeometryId::new(kind::CALO_BLOCK, &[0, 0, 20, 0])));
        // Wrong module.
        assert!(!locator.contains(&GeometryId::new(kind::CALO_BLOCK, &[1, 0, 0, 0])));
        // Wrong kind, same shape.
        assert!(!locator.contains(&GeometryId::new(kind::GVETO_BLOCK, &[0, 0, 5, 5])));
        assert!(locator
            .position_of(&GeometryId::new(kind::CALO_BLOCK, &[0, 0, 20, 0]))
            .is_none());
    }

    #[test]
    fn test_xwall_position() {
        let locator = XWallLocator::new(0);
        let id = GeometryId::new(kind::XCALO_BLOCK, &[0, 0, 1, 0, 0]);
        let position = locator.position_of(&id).unwrap();
        assert_relative_eq!(position.x(), -0.5 * 212.0);
        assert_relative_eq!(position.y(), 2505.0);
    }

    #[test]
    fn test_gveto_position() {
        let locator = GammaVetoLocator::new(0);
        let id = GeometryId::new(kind::GVETO_BLOCK, &[0, 1, 0, 0]);
        let position = locator.position_of(&id).unwrap();
        assert_relative_eq!(position.x(), 290.0);
        assert_relative_eq!(position.z().unwrap(), -1625.0);
    }

    #[test]
    fn test_drift_cell_position_is_planar() {
        let locator = DriftCellLocator::new(0);
        let id = GeometryId::new(kind::DRIFT_CELL, &[0, 1, 2, 56]);
        assert!(locator.contains(&id));

        let position = locator.position_of(&id).unwrap();
        assert_relative_eq!(position.x(), 30.6 + 2.0 * 44.0);
        assert_relative_eq!(position.y(), 0.0);
        assert_eq!(position.z(), None);
    }

    #[test]
    fn test_demonstrator_classifier_partitions_kinds() {
        let model = DetectorModel::demonstrator(0);
        let classifier = model.classifier();

        let cases = [
            (
                Category::Calorimeter,
                GeometryId::new(kind::CALO_BLOCK, &[0, 0, 3, 7]),
                SubsystemTag::MainWallCalo,
            ),
            (
                Category::Calorimeter,
                GeometryId::new(kind::XCALO_BLOCK, &[0, 1, 0, 1, 12]),
                SubsystemTag::XWallCalo,
            ),
            (
                Category::Calorimeter,
                GeometryId::new(kind::GVETO_BLOCK, &[0, 0, 1, 15]),
                SubsystemTag::GammaVetoCalo,
            ),
            (
                Category::DriftCell,
                GeometryId::new(kind::DRIFT_CELL, &[0, 0, 8, 112]),
                SubsystemTag::DriftCell,
            ),
        ];

        for (category, id, expected) in cases {
            match classifier.classify(category, &id) {
                Classification::Classified { tag, .. } => assert_eq!(tag, expected, "{id}"),
                Classification::Unclassified => panic!("{id} should classify"),
            }
        }
    }

    #[test]
    fn test_foreign_module_is_unclassified() {
        let model = DetectorModel::demonstrator(0);
        let classifier = model.classifier();
        let other_module = GeometryId::new(kind::CALO_BLOCK, &[3, 0, 3, 7]);

        assert_eq!(
            classifier.classify(Category::Calorimeter, &other_module),
            Classification::Unclassified
        );
    }
}
