//! CLI command implementations.

mod export;
mod info;
mod resolve;

pub use export::{run_export, ExportArgs};
pub use info::{run_info, InfoArgs};
pub use resolve::{run_resolve, ResolveArgs};
