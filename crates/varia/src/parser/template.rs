//! Template scanner using winnow.
//!
//! Splits template text into literal runs and `__name__` placeholders.
//! The scan is total: anything that is not a well-formed placeholder is
//! literal text, so partial templates mid-edit never fail to scan.
//! Matching is exact-name, case-sensitive, non-overlapping, leftmost-first.

use super::ast::{Segment, Template};
use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::any;

/// Scan a template string into segments.
///
/// `__role__` yields a placeholder named `role`. Names are one or more
/// ASCII alphanumerics, `_`, or `-`; the closing delimiter is the next
/// `__`, so single underscores may appear inside a name (`__dress_code__`)
/// but a bare `____` or an unclosed `__tail` stays literal.
pub fn scan_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        // repeat(0.., any-fallback) consumes everything; this arm is
        // unreachable in practice but keeps the scanner total.
        _ => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;

    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a placeholder: `__` name `__`.
///
/// The closing delimiter is the next `__` after the opener; the text
/// between must be a non-empty run of name characters. Anything else
/// backtracks so the opener is consumed as literal text.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    let _ = "__".parse_next(input)?;

    let rest = *input;
    let Some(end) = rest.find("__") else {
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    };

    let name = &rest[..end];
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    }

    *input = &rest[end + 2..];
    Ok(Segment::Placeholder {
        name: name.to_string(),
    })
}

/// Parse a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Check if a character can appear in a placeholder name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
