//! Bucket/window mapping for browsing large dimensions.
//!
//! A dimension with more values than fit on screen is shown one window at a
//! time. Windows are derived views: computed fresh from the current id and
//! the visibility thresholds, never stored or mutated in place.

use bon::Builder;
use serde::Serialize;

use crate::types::DimensionKind;

/// Per-session visibility thresholds, separately tunable for ordinary
/// variables and pack-entry dimensions.
///
/// Owned by the caller and passed into the engine per call, like the lock
/// set. Thresholds below one are treated as one.
///
/// # Example
///
/// ```
/// use varia::Visibility;
///
/// let vis = Visibility::builder().variable_max(4).build();
/// assert_eq!(vis.variable_max(), 4);
/// assert_eq!(vis.pack_max(), 5);
/// ```
#[derive(Copy, Clone, Debug, Builder)]
pub struct Visibility {
    /// Most variable values shown at once.
    #[builder(default = 10)]
    variable_max: usize,

    /// Most pack entries shown at once. Entries beyond this are never
    /// hidden from addressing, only from the default visible window.
    #[builder(default = 5)]
    pack_max: usize,
}

impl Visibility {
    /// Threshold for ordinary variable dimensions.
    pub fn variable_max(&self) -> usize {
        self.variable_max.max(1)
    }

    /// Threshold for pack-entry dimensions.
    pub fn pack_max(&self) -> usize {
        self.pack_max.max(1)
    }

    /// Threshold for a dimension of the given kind.
    pub fn for_kind(&self, kind: DimensionKind) -> usize {
        match kind {
            DimensionKind::Variable { .. } => self.variable_max(),
            DimensionKind::Pack => self.pack_max(),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// The visible slice of one dimension for a given composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Dimension this window belongs to.
    pub dimension: String,
    /// Values visible at once: `min(visibleMax, size)`.
    pub window_size: usize,
    /// Which window the current index falls in.
    pub window_index: usize,
    /// Total windows: `ceil(size / window_size)`; the last may be partial.
    pub window_count: usize,
    /// Position of the current value inside its window.
    pub offset: usize,
}

impl Window {
    /// Full index of the first value in this window.
    pub fn start(&self) -> usize {
        self.window_index * self.window_size
    }

    /// Full index of the value this window was derived from.
    pub fn current(&self) -> usize {
        self.start() + self.offset
    }
}

/// Window coordinates for a full index within a dimension of `size` values.
pub(crate) fn window_of(dimension: &str, size: usize, visible_max: usize, index: usize) -> Window {
    let size = size.max(1);
    let window_size = visible_max.max(1).min(size);
    let window_count = size.div_ceil(window_size);

    Window {
        dimension: dimension.to_string(),
        window_size,
        window_index: index / window_size,
        window_count,
        offset: index % window_size,
    }
}

/// Full index that advancing to the next window lands on.
///
/// Wraps past the last window back to the first; the landing index is the
/// window's first value, clamped to the last valid index.
pub(crate) fn advance_start(size: usize, visible_max: usize, index: usize) -> usize {
    let size = size.max(1);
    let window_size = visible_max.max(1).min(size);
    let window_count = size.div_ceil(window_size);
    let next_window = (index / window_size + 1) % window_count;

    (next_window * window_size).min(size - 1)
}
