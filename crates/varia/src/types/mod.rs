mod composition;
mod dimension;
mod locks;
mod pack;

pub use composition::{Composition, CompositionId};
pub use dimension::{Dimension, DimensionKind, SourceLayer};
pub use locks::LockSet;
pub use pack::{NoPacks, Pack, PackSource};
