use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-owned pinning of dimensions to ordered value subsets.
///
/// A lock replaces a dimension's addressable values with the listed subset,
/// in the order the lock lists them (locking is a reordering + filtering
/// view over the same underlying values). The engine treats a `LockSet` as
/// an immutable input per invocation; mutation happens here, on the caller's
/// side, between calls.
///
/// # Example
///
/// ```
/// use varia::{locks, LockSet};
///
/// let mut set = LockSet::new();
/// set.lock("role", ["Senior", "Staff"]);
/// assert_eq!(set, locks! { "role" => ["Senior", "Staff"] });
/// assert_eq!(set.get("role"), Some(&["Senior".to_string(), "Staff".to_string()][..]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockSet {
    entries: IndexMap<String, Vec<String>>,
}

impl LockSet {
    /// An empty lock set: every dimension stays at its full value list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a dimension to an ordered subset of values.
    ///
    /// Replaces any previous lock on the same name. Duplicate values are
    /// collapsed keeping the first occurrence, matching dimension semantics.
    pub fn lock(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let mut kept: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !kept.contains(&value) {
                kept.push(value);
            }
        }
        self.entries.insert(name.into(), kept);
    }

    /// Remove the lock on a dimension, restoring its full value list.
    ///
    /// Returns the previously locked values, if any.
    pub fn unlock(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(name)
    }

    /// The locked subset for a name, if one is set.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// True if the named dimension is locked.
    pub fn is_locked(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate locks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of locked dimensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no dimension is locked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
