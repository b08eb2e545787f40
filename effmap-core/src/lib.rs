//! effmap-core: Core types and the counting engine for detector efficiency maps.
//!
//! This crate provides the channel identifier and category types, the
//! hit-count accumulator with its open/closed lifecycle, and the
//! max-based efficiency normalization.
//!

pub mod accumulator;
pub mod channel;
pub mod error;
pub mod geomid;
pub mod normalize;

pub use accumulator::{CountMap, HitAccumulator, Phase};
pub use channel::{Category, EfficiencyRecord, Position, SubsystemTag};
pub use error::{Error, Result};
pub use geomid::{GeometryId, MAX_DEPTH};
pub use normalize::{category_max, normalize};
