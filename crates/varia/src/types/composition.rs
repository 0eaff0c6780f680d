use serde::{Deserialize, Serialize};

/// A compact, serializable address for one point in the combination space.
///
/// `CompositionId` wraps the mixed-radix encoding of a full per-dimension
/// index tuple. This provides:
/// - **Compactness**: 8 bytes, implements `Copy`, stack-allocated
/// - **Serializability**: round-trips through session state and URLs
/// - **Navigability**: plain integer arithmetic ("next", "shuffle") stays
///   valid because out-of-range ids wrap instead of erroring
///
/// Ids are only meaningful against the dimension sizes they were encoded
/// with. Editing a value list, adding a pack entry, or toggling a lock
/// changes the sizes and silently reinterprets existing ids; persist
/// resolved values, not ids, when durability matters.
///
/// # Example
///
/// ```
/// use varia::CompositionId;
///
/// let id = CompositionId::new(5);
/// assert_eq!(id.as_u64(), 5);
/// assert_eq!(id.to_string(), "5");
/// ```
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositionId(u64);

impl CompositionId {
    /// Wrap a raw id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for CompositionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CompositionId> for u64 {
    fn from(id: CompositionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CompositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CompositionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// One complete assignment of indices across all dimensions.
///
/// Created on demand by decoding an id against the current effective sizes;
/// never persisted as an object. Only the id travels, and indices are
/// recomputed by decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composition {
    /// The (wrapped) id these indices decode from.
    pub id: CompositionId,
    /// Per-dimension index, in space order, dimension 0 fastest-varying.
    pub indices: Vec<usize>,
}
