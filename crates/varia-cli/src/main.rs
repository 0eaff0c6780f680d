//! Varia CLI entry point.
//!
//! Provides command-line tools for browsing prompt combination spaces:
//! - `varia info` - Show dimensions, windows, and the total
//! - `varia resolve` - Resolve one composition id to text
//! - `varia export` - Walk a range of ids and emit resolved text

mod commands;
mod input;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_export, run_info, run_resolve, ExportArgs, InfoArgs, ResolveArgs};

/// Prompt combination space tools.
#[derive(Debug, Parser)]
#[command(name = "varia")]
#[command(about = "Prompt combination space tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a prompt's dimensions and total combinations
    Info(InfoArgs),
    /// Resolve a composition id to text
    Resolve(ResolveArgs),
    /// Emit resolved text for a range of composition ids
    Export(ExportArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Info(args) => run_info(args),
        Commands::Resolve(args) => run_resolve(args),
        Commands::Export(args) => run_export(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
