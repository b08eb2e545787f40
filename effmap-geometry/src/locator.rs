//! The locator capability trait.

use effmap_core::{GeometryId, Position, SubsystemTag};

/// Geometry-query collaborator for one detector subsystem.
///
/// A locator answers two read-only, side-effect-free questions about a
/// channel id: does it belong to this subsystem within the active module,
/// and where does it sit. Implementations over the real geometry live in
/// [`crate::planar`]; tests substitute fakes.
///
/// Invariant: `contains(id)` implies `position_of(id)` is `Some`.
pub trait Locator: Send + Sync {
    /// Subsystem this locator answers for.
    fn subsystem(&self) -> SubsystemTag;

    /// Tests whether `id` belongs to this subsystem in the active module.
    fn contains(&self, id: &GeometryId) -> bool;

    /// Returns the reference position of `id`, `None` if not contained.
    fn position_of(&self, id: &GeometryId) -> Option<Position>;
}
