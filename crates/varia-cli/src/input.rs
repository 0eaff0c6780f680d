//! Prompt definition files for the CLI.
//!
//! The engine itself never parses configuration; this module is the
//! external collaborator that does. A prompt file is JSON:
//!
//! ```json
//! {
//!   "template": "A __tone__ __role__ pitch",
//!   "variables": { "tone": ["friendly", "blunt"] },
//!   "shared": { "role": ["founder", "engineer"] },
//!   "packs": { "scene": { "entries": ["at __place__"], "wildcards": { "place": ["a fair"] } } }
//! }
//! ```

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use miette::IntoDiagnostic;
use serde::Deserialize;
use thiserror::Error;
use varia::{LockSet, LookupBuilder, Pack, SourceLayer, Space};

/// Errors that occur while reading a prompt definition file.
#[derive(Debug, Error)]
pub enum InputError {
    /// File I/O error when reading the prompt file.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid prompt-definition JSON.
    #[error("invalid prompt file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A parsed prompt definition file.
#[derive(Debug, Deserialize)]
pub struct PromptFile {
    /// Template text with `__name__` placeholders.
    pub template: String,

    /// Prompt-level variable definitions (highest precedence).
    #[serde(default)]
    pub variables: IndexMap<String, Vec<String>>,

    /// Shared-layer variable definitions.
    #[serde(default)]
    pub shared: IndexMap<String, Vec<String>>,

    /// Referenced packs, keyed by pack id.
    #[serde(default)]
    pub packs: IndexMap<String, Pack>,
}

/// Read and parse a prompt file.
pub fn load_prompt(path: &Path) -> miette::Result<PromptFile> {
    let content = read_to_string(path)
        .map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })
        .into_diagnostic()?;
    serde_json::from_str(&content)
        .map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })
        .into_diagnostic()
}

/// Assemble the combination space a prompt file describes.
pub fn build_space(prompt: &PromptFile) -> miette::Result<Space> {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Shared, clone_defs(&prompt.shared))
        .layer(SourceLayer::Local, clone_defs(&prompt.variables))
        .build();

    let pack_refs: Vec<String> = prompt.packs.keys().cloned().collect();

    Space::assemble(&prompt.template, &lookup, &pack_refs, &prompt.packs)
        .map_err(|e| miette::miette!("Failed to assemble space: {}", e))
}

/// Parse repeated `--lock name=v1|v2` flags into a lock set.
pub fn parse_locks(flags: &[(String, String)]) -> LockSet {
    let mut locks = LockSet::new();
    for (name, values) in flags {
        locks.lock(name.clone(), values.split('|').map(str::trim));
    }
    locks
}

/// Parse a `name=v1|v2` lock flag.
pub fn parse_lock_flag(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid lock format '{}': expected name=value|value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

fn clone_defs(defs: &IndexMap<String, Vec<String>>) -> Vec<(String, Vec<String>)> {
    defs.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}
