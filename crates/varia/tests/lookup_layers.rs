//! Integration tests for the layered wildcard lookup builder.

use varia::{DimensionKind, LookupBuilder, SourceLayer};

// =============================================================================
// Single Layer
// =============================================================================

#[test]
fn single_layer_keeps_given_order() {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Local, [("role", vec!["Junior", "Senior"])])
        .build();

    let dim = lookup.get("role").unwrap();
    assert_eq!(dim.values, vec!["Junior", "Senior"]);
    assert_eq!(dim.kind, DimensionKind::Variable { source: SourceLayer::Local });
}

#[test]
fn duplicates_within_layer_keep_first_occurrence() {
    let lookup = LookupBuilder::new()
        .layer(
            SourceLayer::Local,
            [("tone", vec!["calm", "blunt", "calm", "dry", "blunt"])],
        )
        .build();

    assert_eq!(lookup.get("tone").unwrap().values, vec!["calm", "blunt", "dry"]);
}

#[test]
fn empty_lookup_defines_nothing() {
    let lookup = LookupBuilder::new().build();
    assert!(lookup.is_empty());
    assert!(!lookup.contains("anything"));
}

// =============================================================================
// Layer Precedence
// =============================================================================

#[test]
fn later_layer_replaces_whole_list() {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Shared, [("tone", vec!["formal", "casual", "dry"])])
        .layer(SourceLayer::Local, [("tone", vec!["blunt"])])
        .build();

    // Replace, not merge: nothing of the shared list survives.
    let dim = lookup.get("tone").unwrap();
    assert_eq!(dim.values, vec!["blunt"]);
    assert_eq!(dim.kind, DimensionKind::Variable { source: SourceLayer::Local });
}

#[test]
fn unrelated_names_pass_through_layers() {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Shared, [("a", vec!["1"]), ("b", vec!["2"])])
        .layer(SourceLayer::Local, [("b", vec!["3"])])
        .build();

    assert_eq!(lookup.get("a").unwrap().values, vec!["1"]);
    assert_eq!(lookup.get("a").unwrap().kind, DimensionKind::Variable { source: SourceLayer::Shared });
    assert_eq!(lookup.get("b").unwrap().values, vec!["3"]);
}

#[test]
fn redefinition_keeps_first_encounter_position() {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Shared, [("a", vec!["1"]), ("b", vec!["2"])])
        .layer(SourceLayer::Local, [("a", vec!["9"])])
        .build();

    let names: Vec<&str> = lookup.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(lookup.len(), 2);
}
