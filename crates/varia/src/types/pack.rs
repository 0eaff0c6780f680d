use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An external, reusable collection of text entries with optional nested
/// variables of its own.
///
/// A pack referenced from a template contributes one pack-choice dimension
/// sized to `entries.len()`. Its `wildcards` are folded into the shared
/// dimension set rather than creating a separate multiplicative axis per
/// pack, and entries may themselves contain `__name__` placeholders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    /// Ordered entry texts; each may contain placeholders.
    pub entries: Vec<String>,
    /// Nested variable definitions contributed at shared-layer precedence.
    #[serde(default)]
    pub wildcards: IndexMap<String, Vec<String>>,
}

impl Pack {
    /// Create a pack from entry texts, with no nested variables.
    pub fn from_entries(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            wildcards: IndexMap::new(),
        }
    }

    /// Add a nested variable definition.
    pub fn with_wildcard(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.wildcards
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

/// The seam to the collaborator that owns pack storage.
///
/// Space assembly resolves each declared pack id through this trait; a
/// missing pack surfaces as [`AssembleError::PackNotFound`] rather than a
/// guessed default.
///
/// [`AssembleError::PackNotFound`]: crate::engine::AssembleError::PackNotFound
pub trait PackSource {
    /// Resolve a pack id to its entries and nested variables.
    fn resolve(&self, id: &str) -> Option<Pack>;
}

impl PackSource for IndexMap<String, Pack> {
    fn resolve(&self, id: &str) -> Option<Pack> {
        self.get(id).cloned()
    }
}

/// A source with no packs at all; useful for prompts without pack references.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPacks;

impl PackSource for NoPacks {
    fn resolve(&self, _id: &str) -> Option<Pack> {
        None
    }
}
