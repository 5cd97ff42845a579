//! Typed vertex index.

use std::fmt;

/// Position of an intersection in the sorted vertex table.
///
/// `Copy + Ord + Hash`, so it doubles as the tie-break key in search
/// frontiers.  The inner integer is `pub`; prefer [`index`](Self::index)
/// when indexing per-vertex `Vec`s.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    /// Sentinel for "no vertex".
    pub const INVALID: VertexId = VertexId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for VertexId {
    /// Uninitialised ids are visibly invalid.
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}
