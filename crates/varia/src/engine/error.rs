//! Error types for space assembly and lock validation.

use thiserror::Error;

/// An error that occurred while assembling a dimension space.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// A declared pack reference could not be resolved.
    ///
    /// The engine does not guess or substitute a default pack.
    #[error("pack not found: '{id}'")]
    PackNotFound { id: String },

    /// The product of full dimension sizes does not fit the id range.
    #[error("combination space exceeds the addressable range")]
    SpaceOverflow,
}

/// An error that occurred while validating a lock set against a space.
///
/// Inconsistent locks are rejected rather than silently dropped, because
/// dropping them would change the total without caller awareness.
#[derive(Debug, Error)]
pub enum LockError {
    /// The lock names a dimension the space does not have.
    #[error("lock names unknown dimension '{name}'{}", format_suggestions(suggestions))]
    UnknownDimension {
        name: String,
        suggestions: Vec<String>,
    },

    /// The lock lists a value missing from the dimension's full value list.
    #[error("lock on '{dimension}' names unknown value '{value}'{}", format_suggestions(suggestions))]
    UnknownValue {
        dimension: String,
        value: String,
        suggestions: Vec<String>,
    },

    /// The lock lists no values, which would collapse the total to zero.
    #[error("lock on '{dimension}' is empty")]
    EmptyLock { dimension: String },
}

/// Compute "did you mean" suggestions for a name against candidates.
///
/// Returns up to three candidates ranked by Jaro-Winkler similarity,
/// keeping only close matches.
pub fn compute_suggestions(target: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(target, candidate), candidate))
        .filter(|(score, _)| *score > 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(3).map(|(_, c)| c.clone()).collect()
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(", "))
    }
}
