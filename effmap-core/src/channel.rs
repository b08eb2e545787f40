//! Channel categories, subsystem tags, positions and emitted records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counting category of a detector channel.
///
/// Each category owns its own count map and classifier rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Calorimeter block channels.
    Calorimeter,
    /// Gas-tracker (Geiger) drift-cell channels.
    DriftCell,
}

impl Category {
    /// All categories, in emission order.
    pub const ALL: [Category; 2] = [Category::Calorimeter, Category::DriftCell];

    /// Stable lowercase name for logs and summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Calorimeter => "calorimeter",
            Category::DriftCell => "drift_cell",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical detector subsystem a channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubsystemTag {
    /// Main calorimeter wall block.
    MainWallCalo,
    /// X-wall calorimeter block.
    XWallCalo,
    /// Gamma-veto calorimeter block.
    GammaVetoCalo,
    /// Drift cell of the gas tracker.
    DriftCell,
    /// Channel matched by no locator.
    Unclassified,
}

impl SubsystemTag {
    /// Short name used in output lines.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            SubsystemTag::MainWallCalo => "calo",
            SubsystemTag::XWallCalo => "xcalo",
            SubsystemTag::GammaVetoCalo => "gveto",
            SubsystemTag::DriftCell => "gg",
            SubsystemTag::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for SubsystemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Reference position of a classified channel.
///
/// Calorimeter blocks sit at a 3D point; drift cells are located in the
/// horizontal plane only, so their reference position is 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// 3D block position.
    Block {
        /// X coordinate (mm).
        x: f64,
        /// Y coordinate (mm).
        y: f64,
        /// Z coordinate (mm).
        z: f64,
    },
    /// 2D cell position.
    Cell {
        /// X coordinate (mm).
        x: f64,
        /// Y coordinate (mm).
        y: f64,
    },
}

impl Position {
    /// Creates a 3D block position.
    #[inline]
    #[must_use]
    pub fn block(x: f64, y: f64, z: f64) -> Self {
        Position::Block { x, y, z }
    }

    /// Creates a 2D cell position.
    #[inline]
    #[must_use]
    pub fn cell(x: f64, y: f64) -> Self {
        Position::Cell { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        match *self {
            Position::Block { x, .. } | Position::Cell { x, .. } => x,
        }
    }

    /// Returns the y coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        match *self {
            Position::Block { y, .. } | Position::Cell { y, .. } => y,
        }
    }

    /// Returns the z coordinate for 3D positions.
    #[inline]
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match *self {
            Position::Block { z, .. } => Some(z),
            Position::Cell { .. } => None,
        }
    }
}

/// One emitted efficiency result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EfficiencyRecord {
    /// Subsystem the channel was classified into.
    pub subsystem: SubsystemTag,
    /// Reference position supplied by the matching locator.
    pub position: Position,
    /// Count divided by the category maximum, in [0, 1].
    pub ratio: f64,
}

impl EfficiencyRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(subsystem: SubsystemTag, position: Position, ratio: f64) -> Self {
        Self {
            subsystem,
            position,
            ratio,
        }
    }
}
