//! Implementation of the `varia resolve` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;
use varia::{CompositionId, Substitution};

use crate::input::{build_space, load_prompt, parse_lock_flag, parse_locks};

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Prompt definition file (.json)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Composition id to resolve (wrapped into range)
    #[arg(long, default_value_t = 0)]
    pub id: u64,

    /// Lock a dimension to a subset, as name=value|value (repeatable)
    #[arg(short = 'l', long = "lock", value_parser = parse_lock_flag)]
    pub locks: Vec<(String, String)>,

    /// Show the per-dimension assignment alongside the text
    #[arg(long)]
    pub assignment: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
struct ResolveResult<'a> {
    id: u64,
    total: u64,
    text: &'a str,
    substitutions: &'a [Substitution],
    unresolved: &'a [String],
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
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

    let id = CompositionId::new(args.id);
    let wrapped = view.decode(id).id;
    let resolved = view.resolve(id);

    if args.json {
        let output = ResolveResult {
            id: wrapped.as_u64(),
            total: view.total(),
            text: &resolved.text,
            substitutions: &resolved.substitutions,
            unresolved: &resolved.unresolved,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    println!("{}", resolved.text);

    if args.assignment {
        println!();
        for (name, value) in view.assignment(id) {
            match value {
                Some(value) => println!("  {} = {}", name.bold(), value),
                None => println!("  {} = {}", name.bold(), "(no values)".dimmed()),
            }
        }
        println!(
            "  {} {} of {}",
            "composition".dimmed(),
            wrapped,
            view.total()
        );
    }

    if !resolved.unresolved.is_empty() {
        eprintln!(
            "{} unresolved: {}",
            "warning:".yellow().bold(),
            resolved.unresolved.join(", ")
        );
    }

    Ok(exitcode::OK)
}
