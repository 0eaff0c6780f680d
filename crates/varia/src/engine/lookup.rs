//! Wildcard lookup builder: merges layered value sources into one ordered
//! lookup per variable name.
//!
//! Layers are supplied in increasing precedence order. A later layer that
//! defines an already-seen name replaces the entire value list — a
//! prompt-level definition fully overrides a same-named shared definition,
//! it never merges with it. Values within one layer keep the order given,
//! with duplicates removed keeping the first occurrence.

use indexmap::IndexMap;

use crate::types::{Dimension, SourceLayer};

/// Merged `name → Dimension` lookup for one prompt.
///
/// The merged result is stable for a given set of source layers, so callers
/// may cache it per (job, prompt) pair. Invalidation is the caller's job:
/// rebuild whenever a value is added, a prompt is edited, or a pack is
/// swapped. The lookup itself watches nothing.
#[derive(Clone, Debug, Default)]
pub struct Lookup {
    dims: IndexMap<String, Dimension>,
}

impl Lookup {
    /// Look up the dimension for a name.
    pub fn get(&self, name: &str) -> Option<&Dimension> {
        self.dims.get(name)
    }

    /// True if a name has any definition.
    pub fn contains(&self, name: &str) -> bool {
        self.dims.contains_key(name)
    }

    /// Iterate dimensions in first-encounter order across layers.
    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.dims.values()
    }

    /// Number of defined names.
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// True if no layer defined anything.
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }
}

/// Builder accumulating value-source layers in increasing precedence order.
///
/// # Example
///
/// ```
/// use varia::{LookupBuilder, SourceLayer};
///
/// let lookup = LookupBuilder::new()
///     .layer(SourceLayer::Shared, [("tone", vec!["formal", "casual"])])
///     .layer(SourceLayer::Local, [("tone", vec!["blunt"])])
///     .build();
///
/// // The local layer replaced the shared list wholesale.
/// assert_eq!(lookup.get("tone").unwrap().values, vec!["blunt"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LookupBuilder {
    layers: Vec<(SourceLayer, Vec<(String, Vec<String>)>)>,
}

impl LookupBuilder {
    /// Start with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer; later layers take precedence over earlier ones.
    pub fn layer<N, V>(
        mut self,
        source: SourceLayer,
        definitions: impl IntoIterator<Item = (N, Vec<V>)>,
    ) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let defs = definitions
            .into_iter()
            .map(|(name, values)| {
                (
                    name.into(),
                    values.into_iter().map(Into::into).collect::<Vec<String>>(),
                )
            })
            .collect();
        self.layers.push((source, defs));
        self
    }

    /// Merge all layers into the final lookup.
    ///
    /// Name order in the result is first-encounter order across layers;
    /// redefinition replaces values (and the recorded source layer) without
    /// moving the name's position.
    pub fn build(self) -> Lookup {
        let mut dims: IndexMap<String, Dimension> = IndexMap::new();

        for (source, defs) in self.layers {
            for (name, values) in defs {
                let dim = Dimension::variable(name.clone(), values, source);
                // IndexMap::insert keeps the original position on replace.
                dims.insert(name, dim);
            }
        }

        Lookup { dims }
    }
}
