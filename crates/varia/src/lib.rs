pub mod engine;
pub mod parser;
pub mod types;

pub use engine::{
    AssembleError, LockError, LockView, Lookup, LookupBuilder, Resolved, Space, Substitution,
    Visibility, Window, compute_suggestions,
};
pub use types::{
    Composition, CompositionId, Dimension, DimensionKind, LockSet, NoPacks, Pack, PackSource,
    SourceLayer,
};

/// Creates a [`LockSet`] from name-to-subset pairs.
///
/// Subsets keep the order written, which becomes the effective value order
/// of the locked dimension.
///
/// # Example
///
/// ```
/// use varia::locks;
///
/// let set = locks! { "role" => ["Senior", "Staff"], "department" => ["Sales"] };
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get("role").unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! locks {
    {} => {
        $crate::LockSet::new()
    };
    { $($name:expr => [$($value:expr),+ $(,)?]),+ $(,)? } => {
        {
            let mut set = $crate::LockSet::new();
            $(
                set.lock($name, [$($value),+]);
            )+
            set
        }
    };
}
