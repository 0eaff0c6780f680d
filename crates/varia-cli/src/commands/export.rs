//! Implementation of the `varia export` command.
//!
//! Exports snapshot resolved text rather than composition ids: ids are
//! session-scoped and reinterpreted whenever a value list or lock changes,
//! so the durable artifact is the text itself.

use std::path::PathBuf;

use serde::Serialize;
use varia::CompositionId;

use crate::input::{build_space, load_prompt, parse_lock_flag, parse_locks};

/// Arguments for the export command.
#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Prompt definition file (.json)
    #[arg(required = true)]
    pub file: PathBuf,

    /// First composition id to export
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Most compositions to export
    #[arg(long, default_value_t = 100)]
    pub limit: u64,

    /// Lock a dimension to a subset, as name=value|value (repeatable)
    #[arg(short = 'l', long = "lock", value_parser = parse_lock_flag)]
    pub locks: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one exported composition.
#[derive(Serialize)]
struct ExportLine {
    id: u64,
    text: String,
}

/// Run the export command.
pub fn run_export(args: ExportArgs) -> miette::Result<i32> {
    let prompt = load_prompt(&args.file)?;
    let space = build_space(&prompt)?;
    let locks = parse_locks(&args.locks);

    let view = match space.view(&locks) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Invalid lock: {}", e);
            return Ok(exitcode::DATAERR);
        }
    };

    let count = args.limit.min(view.total());
    let mut lines = Vec::new();
    for step in 0..count {
        // Wrapping addition: walking past the end continues from the start.
        let id = CompositionId::new(args.start.wrapping_add(step));
        let resolved = view.resolve(id);
        lines.push(ExportLine {
            id: view.decode(id).id.as_u64(),
            text: resolved.text,
        });
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&lines).expect("JSON serialization should not fail")
        );
    } else {
        for line in &lines {
            println!("{}", line.text);
        }
    }

    Ok(exitcode::OK)
}
