//! Composition addressing and bucketing engine.
//!
//! This module provides the pure computation core: merging layered value
//! sources into dimensions, addressing the Cartesian product with a
//! mixed-radix codec, windowing large dimensions, projecting lock
//! constraints, and substituting selected values into template text.
//! It performs no I/O and retains no state across calls.

pub mod codec;
mod error;
mod lookup;
mod resolver;
mod space;
mod view;
mod window;

pub use error::{AssembleError, LockError, compute_suggestions};
pub use lookup::{Lookup, LookupBuilder};
pub use resolver::{Resolved, Substitution};
pub use space::Space;
pub use view::LockView;
pub use window::{Visibility, Window};
