//! Lock projection: the reduced space all navigation runs against.
//!
//! A [`LockView`] borrows a space and a lock set for the duration of one
//! logical batch of calls. Encoding and decoding always happen against
//! effective sizes, so the total reflects only lock-consistent combinations
//! and every decoded value for a locked dimension is an element of its lock.
//! Locking or unlocking changes the total and silently reinterprets existing
//! ids; the addressable space is always the current constrained space, never
//! a fixed universe.

use crate::engine::codec;
use crate::engine::error::{LockError, compute_suggestions};
use crate::engine::resolver::{self, Resolved};
use crate::engine::space::Space;
use crate::engine::window::{self, Visibility, Window};
use crate::types::{Composition, CompositionId, LockSet};

/// A space projected through a lock set.
///
/// Holds no state of its own beyond the projection; compute one per call
/// batch and drop it. Cheap to build: O(dimensions + locked values).
#[derive(Debug)]
pub struct LockView<'a> {
    space: &'a Space,
    effective: Vec<Vec<&'a str>>,
    sizes: Vec<u64>,
    total: u64,
}

impl<'a> LockView<'a> {
    /// Validate `locks` against `space` and build the reduced view.
    pub(crate) fn project(space: &'a Space, locks: &'a LockSet) -> Result<Self, LockError> {
        for (name, _) in locks.iter() {
            if space.position(name).is_none() {
                let known: Vec<String> = space
                    .dimensions()
                    .iter()
                    .map(|d| d.name.clone())
                    .collect();
                return Err(LockError::UnknownDimension {
                    name: name.to_string(),
                    suggestions: compute_suggestions(name, &known),
                });
            }
        }

        let mut effective: Vec<Vec<&'a str>> = Vec::with_capacity(space.dimensions().len());
        for dim in space.dimensions() {
            match locks.get(&dim.name) {
                Some([]) => {
                    return Err(LockError::EmptyLock {
                        dimension: dim.name.clone(),
                    });
                }
                Some(subset) => {
                    for value in subset {
                        if dim.index_of(value).is_none() {
                            return Err(LockError::UnknownValue {
                                dimension: dim.name.clone(),
                                value: value.clone(),
                                suggestions: compute_suggestions(value, &dim.values),
                            });
                        }
                    }
                    effective.push(subset.iter().map(String::as_str).collect());
                }
                None => effective.push(dim.values.iter().map(String::as_str).collect()),
            }
        }

        let sizes: Vec<u64> = effective.iter().map(|v| v.len().max(1) as u64).collect();
        let total = codec::total(&sizes);

        Ok(Self {
            space,
            effective,
            sizes,
            total,
        })
    }

    /// The space this view projects.
    pub fn space(&self) -> &'a Space {
        self.space
    }

    /// Number of lock-consistent combinations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Effective sizes in addressing order.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Effective values of a dimension: the locked subset in lock order,
    /// or the full value list when unlocked.
    pub fn effective_values(&self, name: &str) -> Option<&[&'a str]> {
        self.space
            .position(name)
            .map(|pos| self.effective[pos].as_slice())
    }

    /// Decode an id (wrapped into range) to per-dimension indices.
    pub fn decode(&self, id: CompositionId) -> Composition {
        let (wrapped, indices) = codec::decode(&self.sizes, id.as_u64());
        Composition {
            id: CompositionId::new(wrapped),
            indices,
        }
    }

    /// Encode per-dimension indices back to an id.
    pub fn encode(&self, indices: &[usize]) -> CompositionId {
        CompositionId::new(codec::encode(&self.sizes, indices))
    }

    /// The value a composition selects for the dimension at `position`.
    ///
    /// `None` for a dimension with no values defined yet.
    pub fn value_at(&self, position: usize, index: usize) -> Option<&'a str> {
        self.effective[position].get(index).copied()
    }

    /// Selected value per dimension, in addressing order.
    pub fn selected(&self, id: CompositionId) -> Vec<Option<&'a str>> {
        let composition = self.decode(id);
        composition
            .indices
            .iter()
            .enumerate()
            .map(|(pos, &index)| self.value_at(pos, index))
            .collect()
    }

    /// `(name, selected value)` pairs, in addressing order.
    pub fn assignment(&self, id: CompositionId) -> Vec<(&'a str, Option<&'a str>)> {
        let selected = self.selected(id);
        self.space
            .dimensions()
            .iter()
            .zip(selected)
            .map(|(dim, value)| (dim.name.as_str(), value))
            .collect()
    }

    /// Derived window per dimension for the given composition.
    pub fn windows(&self, id: CompositionId, visibility: &Visibility) -> Vec<Window> {
        let composition = self.decode(id);
        self.space
            .dimensions()
            .iter()
            .enumerate()
            .map(|(pos, dim)| {
                window::window_of(
                    &dim.name,
                    self.sizes[pos] as usize,
                    visibility.for_kind(dim.kind),
                    composition.indices[pos],
                )
            })
            .collect()
    }

    /// Derived window for one dimension.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::UnknownDimension`] for a name this space has no
    /// dimension for.
    pub fn window(
        &self,
        id: CompositionId,
        name: &str,
        visibility: &Visibility,
    ) -> Result<Window, LockError> {
        let pos = self.require(name)?;
        let composition = self.decode(id);
        let dim = &self.space.dimensions()[pos];
        Ok(window::window_of(
            &dim.name,
            self.sizes[pos] as usize,
            visibility.for_kind(dim.kind),
            composition.indices[pos],
        ))
    }

    /// Bucket jump: move one dimension to a chosen value's index, leaving
    /// every other dimension's index unchanged.
    ///
    /// Implemented as decode, replace one digit, re-encode — never by
    /// recomputing the tuple from scratch — which is what guarantees the
    /// "only this dimension moves" contract. The index is wrapped into the
    /// dimension's effective size, like ids are.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::UnknownDimension`] for an unknown name.
    pub fn jump(
        &self,
        id: CompositionId,
        name: &str,
        value_index: usize,
    ) -> Result<CompositionId, LockError> {
        let pos = self.require(name)?;
        let mut composition = self.decode(id);
        composition.indices[pos] = value_index % self.sizes[pos] as usize;
        Ok(self.encode(&composition.indices))
    }

    /// Advance one dimension to its next window without picking a value,
    /// wrapping past the last window.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::UnknownDimension`] for an unknown name.
    pub fn advance_window(
        &self,
        id: CompositionId,
        name: &str,
        visibility: &Visibility,
    ) -> Result<CompositionId, LockError> {
        let pos = self.require(name)?;
        let mut composition = self.decode(id);
        let dim = &self.space.dimensions()[pos];
        composition.indices[pos] = window::advance_start(
            self.sizes[pos] as usize,
            visibility.for_kind(dim.kind),
            composition.indices[pos],
        );
        Ok(self.encode(&composition.indices))
    }

    /// Remap an id into another view of the same space.
    ///
    /// This is the lock-toggle contract: a displayed value that is still
    /// allowed under the target view keeps its place; a value the target
    /// disallows (or a dimension with nothing selected) snaps to the
    /// target's first effective entry.
    pub fn carry_to(&self, id: CompositionId, target: &LockView<'_>) -> CompositionId {
        let selected = self.selected(id);
        let indices: Vec<usize> = selected
            .iter()
            .enumerate()
            .map(|(pos, value)| {
                value
                    .and_then(|v| target.effective[pos].iter().position(|t| *t == v))
                    .unwrap_or(0)
            })
            .collect();
        target.encode(&indices)
    }

    /// Substitute the composition's values into the template.
    pub fn resolve(&self, id: CompositionId) -> Resolved {
        resolver::resolve_view(self, id)
    }

    fn require(&self, name: &str) -> Result<usize, LockError> {
        self.space.position(name).ok_or_else(|| {
            let known: Vec<String> = self
                .space
                .dimensions()
                .iter()
                .map(|d| d.name.clone())
                .collect();
            LockError::UnknownDimension {
                name: name.to_string(),
                suggestions: compute_suggestions(name, &known),
            }
        })
    }
}
