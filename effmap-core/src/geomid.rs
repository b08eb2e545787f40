//! Hierarchical channel identifiers.

use crate::error::{Error, Result};
use std::fmt;

/// Maximum number of address levels in a [`GeometryId`].
pub const MAX_DEPTH: usize = 5;

/// Hierarchical identifier of a physical detector channel.
///
/// An id is a `kind` code naming the channel family plus an address path
/// of up to [`MAX_DEPTH`] levels (e.g. module/side/column/row). The core
/// treats ids as opaque values; only geometry locators decode addresses.
///
/// Ids are totally ordered (kind first, then address levels), which gives
/// ordered count maps a well-defined, documented iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeometryId {
    kind: u16,
    depth: u8,
    addr: [u16; MAX_DEPTH],
}

impl GeometryId {
    /// Creates a new identifier.
    ///
    /// # Panics
    /// Panics if `addr` has more than [`MAX_DEPTH`] levels. Use
    /// [`GeometryId::try_new`] for untrusted input.
    #[must_use]
    pub fn new(kind: u16, addr: &[u16]) -> Self {
        Self::try_new(kind, addr).expect("address depth within MAX_DEPTH")
    }

    /// Creates a new identifier, rejecting over-deep addresses.
    pub fn try_new(kind: u16, addr: &[u16]) -> Result<Self> {
        if addr.len() > MAX_DEPTH {
            return Err(Error::InvalidDepth {
                depth: addr.len(),
                max: MAX_DEPTH,
            });
        }
        let mut slots = [0u16; MAX_DEPTH];
        slots[..addr.len()].copy_from_slice(addr);
        Ok(Self {
            kind,
            depth: addr.len() as u8,
            addr: slots,
        })
    }

    /// Returns the channel-family kind code.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> u16 {
        self.kind
    }

    /// Returns the number of address levels.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    /// Returns the address level at `index`, if present.
    #[inline]
    #[must_use]
    pub fn level(&self, index: usize) -> Option<u16> {
        self.levels().get(index).copied()
    }

    /// Returns the address path as a slice.
    #[inline]
    #[must_use]
    pub fn levels(&self) -> &[u16] {
        &self.addr[..self.depth as usize]
    }
}

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:", self.kind)?;
        for (i, level) in self.levels().iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{level}")?;
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::GeometryId;
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    struct Repr {
        kind: u16,
        addr: Vec<u16>,
    }

    impl Serialize for GeometryId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("GeometryId", 2)?;
            state.serialize_field("kind", &self.kind())?;
            state.serialize_field("addr", self.levels())?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for GeometryId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = Repr::deserialize(deserializer)?;
            GeometryId::try_new(repr.kind, &repr.addr).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_roundtrip() {
        let id = GeometryId::new(1302, &[0, 1, 3, 7]);
        assert_eq!(id.kind(), 1302);
        assert_eq!(id.depth(), 4);
        assert_eq!(id.levels(), &[0, 1, 3, 7]);
        assert_eq!(id.level(2), Some(3));
        assert_eq!(id.level(4), None);
    }

    #[test]
    fn test_too_deep_address_rejected() {
        let result = GeometryId::try_new(0, &[0; MAX_DEPTH + 1]);
        assert!(matches!(result, Err(Error::InvalidDepth { depth: 6, .. })));
    }

    #[test]
    fn test_ordering_is_kind_then_address() {
        let a = GeometryId::new(10, &[0, 5]);
        let b = GeometryId::new(10, &[1, 0]);
        let c = GeometryId::new(11, &[0, 0]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_display() {
        let id = GeometryId::new(1302, &[0, 1, 3, 7]);
        assert_eq!(id.to_string(), "[1302:0.1.3.7]");
    }
}
