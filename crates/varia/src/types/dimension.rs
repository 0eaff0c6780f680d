use serde::{Deserialize, Serialize};

/// The source layer a variable definition resolved from.
///
/// Recorded for display only. Precedence is decided by the lookup builder;
/// the layer a dimension ends up carrying never affects addressing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLayer {
    /// Defined by a shared/extension layer.
    Shared,
    /// Defined at the prompt level, overriding any shared definition.
    Local,
}

impl std::fmt::Display for SourceLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLayer::Shared => write!(f, "shared"),
            SourceLayer::Local => write!(f, "local"),
        }
    }
}

/// What a dimension represents within the addressable space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    /// An ordinary substitutable variable.
    Variable {
        /// Layer the winning definition came from.
        source: SourceLayer,
    },
    /// A pack-choice axis: each value is one entry of a referenced pack.
    Pack,
}

/// One substitutable variable (or pack reference) and its ordered values.
///
/// Values are deduplicated preserving first-seen order. A dimension with no
/// values still participates in addressing with an effective size of one;
/// no substitution takes place for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Placeholder name this dimension answers to.
    pub name: String,
    /// Ordered, deduplicated values.
    pub values: Vec<String>,
    /// Variable or pack-choice axis.
    pub kind: DimensionKind,
}

impl Dimension {
    /// Create a variable dimension, deduplicating values first-seen.
    pub fn variable(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
        source: SourceLayer,
    ) -> Self {
        Self {
            name: name.into(),
            values: dedup_first_seen(values),
            kind: DimensionKind::Variable { source },
        }
    }

    /// Create a pack-choice dimension from a pack's entries.
    ///
    /// Entries are kept verbatim and in order; unlike variable values they
    /// are authored as a sequence, but duplicates are still collapsed so
    /// that every index addresses a distinct combination.
    pub fn pack(name: impl Into<String>, entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: dedup_first_seen(entries),
            kind: DimensionKind::Pack,
        }
    }

    /// Number of values actually defined (may be zero mid-edit).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no values are defined for this name yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Size this dimension contributes to the full space.
    ///
    /// A dimension with zero values counts as size one so that navigation
    /// stays well-defined while a prompt is mid-edit.
    pub fn full_size(&self) -> u64 {
        self.values.len().max(1) as u64
    }

    /// Full index of a value, if present.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// True if this is a pack-choice dimension.
    pub fn is_pack(&self) -> bool {
        self.kind == DimensionKind::Pack
    }
}

fn dedup_first_seen(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
