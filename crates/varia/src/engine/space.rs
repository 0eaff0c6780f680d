//! The ordered dimension set for one prompt.
//!
//! Assembly walks the template text left to right and gives every name its
//! dimension at the position of first encounter: local variables where the
//! lookup defines them, one pack-choice dimension per referenced pack, and
//! the variables nested inside pack entries unioned into the same set.
//! That order is stable for the life of the space, which is what keeps
//! encodings valid across repeated calls within a session.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::engine::error::{AssembleError, LockError};
use crate::engine::lookup::Lookup;
use crate::engine::view::LockView;
use crate::parser::{Template, scan_template};
use crate::types::{Dimension, LockSet, Pack, PackSource, SourceLayer};

/// The addressable combination space of one prompt.
///
/// Holds the scanned template and the ordered dimension set; all mutable
/// session state (current id, locks, visibility) stays with the caller and
/// is passed into each operation.
///
/// # Example
///
/// ```
/// use varia::{LookupBuilder, NoPacks, Space, SourceLayer};
///
/// let lookup = LookupBuilder::new()
///     .layer(SourceLayer::Local, [
///         ("role", vec!["Junior", "Mid-level", "Senior", "Staff"]),
///         ("department", vec!["Engineering", "Sales"]),
///     ])
///     .build();
///
/// let space = Space::assemble("__role__ in __department__", &lookup, &[], &NoPacks).unwrap();
/// assert_eq!(space.full_total(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct Space {
    template: Template,
    dims: Vec<Dimension>,
    positions: HashMap<String, usize>,
    entry_templates: HashMap<String, Vec<Template>>,
}

impl Space {
    /// Assemble the dimension set for a prompt.
    ///
    /// `pack_refs` lists the pack ids the prompt declares; each is resolved
    /// through `packs` up front, and a missing one is an error. A declared
    /// pack only contributes a dimension once its name is actually
    /// encountered in the template (or inside another pack's entries), but
    /// its nested wildcards join the shared lookup either way, at lower
    /// precedence than every caller layer. When two packs define the same
    /// wildcard name, the first declaration wins.
    ///
    /// # Errors
    ///
    /// - [`AssembleError::PackNotFound`] if a declared pack id does not resolve
    /// - [`AssembleError::SpaceOverflow`] if the full-space product exceeds `u64`
    pub fn assemble(
        text: &str,
        lookup: &Lookup,
        pack_refs: &[String],
        packs: &impl PackSource,
    ) -> Result<Self, AssembleError> {
        let mut resolved_packs: IndexMap<String, Pack> = IndexMap::new();
        for id in pack_refs {
            let pack = packs
                .resolve(id)
                .ok_or_else(|| AssembleError::PackNotFound { id: id.clone() })?;
            resolved_packs.entry(id.clone()).or_insert(pack);
        }

        // Pack wildcards sit below every caller layer: a name the lookup
        // already defines keeps the lookup's list wholesale.
        let mut wildcard_layer: IndexMap<String, Dimension> = IndexMap::new();
        for pack in resolved_packs.values() {
            for (name, values) in &pack.wildcards {
                if !lookup.contains(name) && !wildcard_layer.contains_key(name) {
                    wildcard_layer.insert(
                        name.clone(),
                        Dimension::variable(name.clone(), values.clone(), SourceLayer::Shared),
                    );
                }
            }
        }

        let template = scan_template(text);

        let mut space = Self {
            template: template.clone(),
            dims: Vec::new(),
            positions: HashMap::new(),
            entry_templates: HashMap::new(),
        };

        for name in template.placeholder_names() {
            space.add_dimension(name, lookup, &resolved_packs, &wildcard_layer);
        }

        space.checked_full_total()?;
        Ok(space)
    }

    /// Give `name` a dimension at the next position, then union in whatever
    /// its pack entries reference. Names already placed, and names with no
    /// definition anywhere, are left alone.
    fn add_dimension(
        &mut self,
        name: &str,
        lookup: &Lookup,
        packs: &IndexMap<String, Pack>,
        wildcard_layer: &IndexMap<String, Dimension>,
    ) {
        if self.positions.contains_key(name) {
            return;
        }

        if let Some(pack) = packs.get(name) {
            let dim = Dimension::pack(name, pack.entries.clone());
            // Scan the deduplicated entries so templates stay index-aligned
            // with the dimension's values.
            let entry_templates: Vec<Template> =
                dim.values.iter().map(|entry| scan_template(entry)).collect();
            self.push(dim);
            // Entries are templates themselves; walk them in order so their
            // nested names join the set immediately after the pack.
            for entry in &entry_templates {
                let nested: Vec<String> =
                    entry.placeholder_names().map(str::to_string).collect();
                for nested_name in nested {
                    self.add_dimension(&nested_name, lookup, packs, wildcard_layer);
                }
            }
            self.entry_templates.insert(name.to_string(), entry_templates);
        } else if let Some(dim) = lookup.get(name).or_else(|| wildcard_layer.get(name)) {
            self.push(dim.clone());
        }
    }

    fn push(&mut self, dim: Dimension) {
        self.positions.insert(dim.name.clone(), self.dims.len());
        self.dims.push(dim);
    }

    fn checked_full_total(&self) -> Result<u64, AssembleError> {
        let mut product: u64 = 1;
        for dim in &self.dims {
            product = product
                .checked_mul(dim.full_size())
                .ok_or(AssembleError::SpaceOverflow)?;
        }
        Ok(product)
    }

    /// The scanned template this space was assembled from.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Dimensions in addressing order, dimension 0 fastest-varying.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dims
    }

    /// Dimension by name.
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.positions.get(name).map(|&pos| &self.dims[pos])
    }

    /// Position of a dimension in addressing order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Pre-scanned entry templates of a pack dimension.
    pub(crate) fn entry_templates(&self, name: &str) -> Option<&[Template]> {
        self.entry_templates.get(name).map(Vec::as_slice)
    }

    /// Size of the unconstrained space.
    ///
    /// A single multiplicative pass; cheap enough to recompute on every
    /// navigation. Overflow was ruled out at assembly.
    pub fn full_total(&self) -> u64 {
        self.dims.iter().map(Dimension::full_size).product::<u64>().max(1)
    }

    /// Project this space through a lock set.
    ///
    /// Validates every lock against the full value lists and returns the
    /// reduced view that all navigation, windowing, and resolution runs
    /// against.
    ///
    /// # Errors
    ///
    /// Returns [`LockError`] if a lock names an unknown dimension, lists a
    /// value missing from the dimension, or lists nothing at all.
    pub fn view<'a>(&'a self, locks: &'a LockSet) -> Result<LockView<'a>, LockError> {
        LockView::project(self, locks)
    }
}
