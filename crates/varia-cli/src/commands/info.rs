//! Implementation of the `varia info` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;
use varia::Visibility;

use crate::input::{build_space, load_prompt, parse_lock_flag, parse_locks};
use crate::output::table::format_dimension_table;

/// Arguments for the info command.
#[derive(Debug, clap::Args)]
pub struct InfoArgs {
    /// Prompt definition file (.json)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Lock a dimension to a subset, as name=value|value (repeatable)
    #[arg(short = 'l', long = "lock", value_parser = parse_lock_flag)]
    pub locks: Vec<(String, String)>,

    /// Most variable values visible at once
    #[arg(long, default_value_t = 10)]
    pub variable_max: usize,

    /// Most pack entries visible at once
    #[arg(long, default_value_t = 5)]
    pub pack_max: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for info results.
#[derive(Serialize)]
struct InfoResult<'a> {
    total: u64,
    dimensions: Vec<DimensionInfo<'a>>,
}

#[derive(Serialize)]
struct DimensionInfo<'a> {
    name: &'a str,
    kind: String,
    size: usize,
    full_size: usize,
    locked: bool,
}

/// Run the info command.
pub fn run_info(args: InfoArgs) -> miette::Result<i32> {
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

    let visibility = Visibility::builder()
        .variable_max(args.variable_max)
        .pack_max(args.pack_max)
        .build();

    if args.json {
        let dimensions: Vec<DimensionInfo<'_>> = space
            .dimensions()
            .iter()
            .enumerate()
            .map(|(pos, dim)| DimensionInfo {
                name: &dim.name,
                kind: match dim.kind {
                    varia::DimensionKind::Variable { source } => source.to_string(),
                    varia::DimensionKind::Pack => "pack".to_string(),
                },
                size: view.sizes()[pos] as usize,
                full_size: dim.len(),
                locked: locks.is_locked(&dim.name),
            })
            .collect();
        let output = InfoResult {
            total: view.total(),
            dimensions,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_dimension_table(&view, &visibility));
        println!("{} {}", "Total combinations:".bold(), view.total());
    }

    Ok(exitcode::OK)
}
