//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use varia::{DimensionKind, LockView, Visibility};

/// Format a lock view's dimensions as an ASCII table.
pub fn format_dimension_table(view: &LockView<'_>, visibility: &Visibility) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dimension", "Kind", "Values", "Windows"]);

    for (pos, dim) in view.space().dimensions().iter().enumerate() {
        let kind = match dim.kind {
            DimensionKind::Variable { source } => source.to_string(),
            DimensionKind::Pack => "pack".to_string(),
        };
        let size = view.sizes()[pos] as usize;
        let window_size = visibility.for_kind(dim.kind).min(size);
        let windows = size.div_ceil(window_size);
        let values = if dim.is_empty() {
            "0".to_string()
        } else if size == dim.len() {
            size.to_string()
        } else {
            format!("{} of {}", size, dim.len())
        };

        table.add_row(vec![dim.name.clone(), kind, values, windows.to_string()]);
    }

    table
}
