//! Placeholder scanning for prompt templates.
//!
//! The engine's only text-level interface is the `__name__` placeholder.
//! This module locates placeholders and nothing more; which names mean
//! anything is decided later, against the assembled dimension set.

mod ast;
mod template;

pub use ast::{Segment, Template};
pub use template::scan_template;
