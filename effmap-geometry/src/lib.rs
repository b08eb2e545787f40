//! effmap-geometry: Subsystem locators and channel classification.
//!
//! Locators are narrow geometry-query capabilities: membership of a channel
//! in one subsystem of the active module, and its reference position. The
//! classifier chains them in fixed priority order to tag each channel.
//!

pub mod classifier;
pub mod locator;
pub mod planar;

pub use classifier::{Classification, SubsystemClassifier};
pub use locator::Locator;
pub use planar::{
    kind, DetectorModel, DriftCellLocator, GammaVetoLocator, MainWallLocator, XWallLocator,
};
