//! Content flags for collision filtering.
//!
//! Every brush carries a set of content flags, and every raycast carries a
//! mask. A brush is only considered when the two overlap, which is how the
//! grapple aim query sees only rope-friendly surfaces while the ground probe
//! sees everything that stops the carrier.

use serde::{Deserialize, Serialize};

/// Content flags describe what type of volume a brush is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    /// Empty space - nothing here.
    pub const EMPTY: Self = Self(0);

    /// Solid world geometry - walls, floors, etc.
    pub const SOLID: Self = Self(1 << 0);

    /// Surfaces a rope anchor can bite into.
    pub const SWINGABLE: Self = Self(1 << 1);

    /// Blocks the carrier but not aim rays (invisible barriers).
    pub const CARRIER_CLIP: Self = Self(1 << 2);

    /// Mask for the grapple aim query.
    pub const MASK_SWINGABLE: Self = Self(Self::SWINGABLE.0);

    /// Mask for carrier movement and ground probes.
    pub const MASK_CARRIER_SOLID: Self = Self(Self::SOLID.0 | Self::CARRIER_CLIP.0);

    /// Check if these flags contain a specific flag.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the given flags are set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Combine two flag sets.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Remove flags from this set.
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl std::ops::BitOr for ContentFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for ContentFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_flags_operations() {
        let solid = ContentFlags::SOLID;
        let swingable = ContentFlags::SWINGABLE;
        let combined = solid | swingable;

        assert!(combined.contains(solid));
        assert!(combined.contains(swingable));
        assert!(!combined.contains(ContentFlags::CARRIER_CLIP));
        assert!(combined.intersects(solid));
        assert_eq!(combined.difference(swingable), solid);
    }

    #[test]
    fn test_swingable_mask() {
        let mask = ContentFlags::MASK_SWINGABLE;
        assert!(mask.contains(ContentFlags::SWINGABLE));
        assert!(!mask.intersects(ContentFlags::SOLID));

        // A beam tagged both solid and swingable matches both masks.
        let beam = ContentFlags::SOLID | ContentFlags::SWINGABLE;
        assert!(mask.intersects(beam));
        assert!(ContentFlags::MASK_CARRIER_SOLID.intersects(beam));
    }
}
