//! Integration tests for the template scanner.

use varia::parser::{scan_template, Segment};

fn literal(s: &str) -> Segment {
    Segment::Literal(s.to_string())
}

fn placeholder(name: &str) -> Segment {
    Segment::Placeholder {
        name: name.to_string(),
    }
}

// =============================================================================
// Basic Scanning
// =============================================================================

#[test]
fn scan_literal_only() {
    let template = scan_template("no placeholders here");
    assert_eq!(template.segments, vec![literal("no placeholders here")]);
}

#[test]
fn scan_single_placeholder() {
    let template = scan_template("__role__");
    assert_eq!(template.segments, vec![placeholder("role")]);
}

#[test]
fn scan_placeholder_in_text() {
    let template = scan_template("A __role__ walks in");
    assert_eq!(
        template.segments,
        vec![literal("A "), placeholder("role"), literal(" walks in")]
    );
}

#[test]
fn scan_adjacent_placeholders() {
    let template = scan_template("__a____b__");
    assert_eq!(template.segments, vec![placeholder("a"), placeholder("b")]);
}

#[test]
fn scan_empty_input() {
    let template = scan_template("");
    assert!(template.segments.is_empty());
}

// =============================================================================
// Name Syntax
// =============================================================================

#[test]
fn scan_name_with_inner_underscore() {
    let template = scan_template("__dress_code__");
    assert_eq!(template.segments, vec![placeholder("dress_code")]);
}

#[test]
fn scan_name_with_digits_and_dash() {
    let template = scan_template("__top-10__");
    assert_eq!(template.segments, vec![placeholder("top-10")]);
}

#[test]
fn scan_is_case_sensitive() {
    let template = scan_template("__Role__");
    assert_eq!(template.segments, vec![placeholder("Role")]);
}

// =============================================================================
// Malformed Input Stays Literal
// =============================================================================

#[test]
fn scan_unclosed_placeholder_is_literal() {
    let template = scan_template("__tail");
    assert_eq!(template.segments, vec![literal("__tail")]);
}

#[test]
fn scan_bare_delimiters_are_literal() {
    let template = scan_template("____");
    assert_eq!(template.segments, vec![literal("____")]);
}

#[test]
fn scan_space_in_name_is_literal() {
    let template = scan_template("__not a name__");
    assert_eq!(template.segments, vec![literal("__not a name__")]);
}

#[test]
fn scan_leftmost_first_non_overlapping() {
    // The first delimiter pair wins; what's left over is literal.
    let template = scan_template("__a__b__");
    assert_eq!(
        template.segments,
        vec![placeholder("a"), literal("b__")]
    );
}

// =============================================================================
// Totality
// =============================================================================

#[test]
fn scan_round_trips_arbitrary_text() {
    let inputs = [
        "plain",
        "__x__",
        "__ _ __",
        "_____x_____",
        "underscore _ salad __ here",
        "unicode: päck __tone__ 日本語",
    ];
    for input in inputs {
        let template = scan_template(input);
        let rebuilt: String = template
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(s) => s.clone(),
                Segment::Placeholder { name } => format!("__{name}__"),
            })
            .collect();
        assert_eq!(rebuilt, input, "scan must preserve all input text");
    }
}

#[test]
fn placeholder_names_iterates_repeats_in_order() {
    let template = scan_template("__a__ __b__ __a__");
    let names: Vec<&str> = template.placeholder_names().collect();
    assert_eq!(names, vec!["a", "b", "a"]);
}
