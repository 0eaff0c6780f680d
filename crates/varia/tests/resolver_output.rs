//! Integration tests for composition resolution.

use indexmap::IndexMap;
use varia::{locks, CompositionId, LockSet, LookupBuilder, NoPacks, Pack, SourceLayer, Space};

fn role_department() -> Space {
    let lookup = LookupBuilder::new()
        .layer(
            SourceLayer::Local,
            [
                ("role", vec!["Junior", "Mid-level", "Senior", "Staff"]),
                ("department", vec!["Engineering", "Sales"]),
            ],
        )
        .build();
    Space::assemble("__role__ in __department__", &lookup, &[], &NoPacks).unwrap()
}

// =============================================================================
// Basic Substitution
// =============================================================================

#[test]
fn resolves_first_composition() {
    let space = role_department();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();

    let resolved = view.resolve(CompositionId::new(0));
    insta::assert_snapshot!(resolved.text, @"Junior in Engineering");
    assert!(resolved.unresolved.is_empty());
}

#[test]
fn resolves_worked_example_id_five() {
    let space = role_department();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();

    // id 5: role = 5 mod 4 = 1 (Mid-level), department = 5 div 4 = 1 (Sales).
    let resolved = view.resolve(CompositionId::new(5));
    insta::assert_snapshot!(resolved.text, @"Mid-level in Sales");
}

#[test]
fn substitution_ranges_index_the_resolved_text() {
    let space = role_department();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();

    let resolved = view.resolve(CompositionId::new(5));
    assert_eq!(resolved.substitutions.len(), 2);
    for sub in &resolved.substitutions {
        assert_eq!(&resolved.text[sub.range.clone()], sub.value);
    }
    assert_eq!(resolved.substitutions[0].name, "role");
    assert_eq!(resolved.substitutions[0].value, "Mid-level");
    assert_eq!(resolved.substitutions[1].name, "department");
    assert_eq!(resolved.substitutions[1].value, "Sales");
}

#[test]
fn repeated_placeholder_resolves_every_occurrence() {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Local, [("role", vec!["Junior", "Senior"])])
        .build();
    let space = Space::assemble("__role__, always __role__", &lookup, &[], &NoPacks).unwrap();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();

    let resolved = view.resolve(CompositionId::new(1));
    assert_eq!(resolved.text, "Senior, always Senior");
    assert_eq!(resolved.substitutions.len(), 2);
}

// =============================================================================
// Fail-Soft Diagnostics
// =============================================================================

#[test]
fn unknown_placeholder_stays_verbatim() {
    let lookup = LookupBuilder::new()
        .layer(SourceLayer::Local, [("role", vec!["Junior"])])
        .build();
    let partial = Space::assemble("__role__ __ghost__", &lookup, &[], &NoPacks).unwrap();

    let locks = LockSet::new();
    let view = partial.view(&locks).unwrap();
    let resolved = view.resolve(CompositionId::new(0));

    assert_eq!(resolved.text, "Junior __ghost__");
    assert_eq!(resolved.unresolved, vec!["ghost"]);
}

#[test]
fn empty_dimension_stays_verbatim() {
    let lookup = LookupBuilder::new()
        .layer(
            SourceLayer::Local,
            [("role", vec![]), ("department", vec!["Engineering", "Sales"])],
        )
        .build();
    let space = Space::assemble("__role__ in __department__", &lookup, &[], &NoPacks).unwrap();

    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();
    assert_eq!(view.total(), 2);

    let resolved = view.resolve(CompositionId::new(1));
    assert_eq!(resolved.text, "__role__ in Sales");
    assert_eq!(resolved.unresolved, vec!["role"]);
}

#[test]
fn diagnostics_deduplicate_repeated_names() {
    let lookup = LookupBuilder::new().build();
    let space = Space::assemble("__ghost__ and __ghost__", &lookup, &[], &NoPacks).unwrap();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();

    let resolved = view.resolve(CompositionId::new(0));
    assert_eq!(resolved.unresolved, vec!["ghost"]);
}

// =============================================================================
// Pack Entries
// =============================================================================

fn job_space() -> Space {
    let mut packs = IndexMap::new();
    packs.insert(
        "job".to_string(),
        Pack::from_entries(["__x__ Engineer", "__x__ Designer"])
            .with_wildcard("x", ["Junior", "Senior"]),
    );
    let lookup = LookupBuilder::new().build();
    Space::assemble("__job__", &lookup, &["job".to_string()], &packs).unwrap()
}

#[test]
fn pack_combinations_are_distinct_and_exhaustive() {
    let space = job_space();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();
    assert_eq!(view.total(), 4);

    let mut texts: Vec<String> = (0..4)
        .map(|id| view.resolve(CompositionId::new(id)).text)
        .collect();
    texts.sort();
    assert_eq!(
        texts,
        vec![
            "Junior Designer",
            "Junior Engineer",
            "Senior Designer",
            "Senior Engineer",
        ]
    );
}

#[test]
fn pack_substitution_covers_rendered_entry() {
    let space = job_space();
    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();

    let resolved = view.resolve(CompositionId::new(0));
    assert_eq!(resolved.text, "Junior Engineer");

    // The nested variable reports first, then the enclosing pack.
    assert_eq!(resolved.substitutions.len(), 2);
    assert_eq!(resolved.substitutions[0].name, "x");
    assert_eq!(resolved.substitutions[0].value, "Junior");
    assert_eq!(resolved.substitutions[1].name, "job");
    assert_eq!(resolved.substitutions[1].value, "Junior Engineer");
    for sub in &resolved.substitutions {
        assert_eq!(&resolved.text[sub.range.clone()], sub.value);
    }
}

#[test]
fn locked_pack_resolves_the_right_entry() {
    let space = job_space();
    let locks = locks! { "job" => ["__x__ Designer"] };
    let view = space.view(&locks).unwrap();
    assert_eq!(view.total(), 2);

    let resolved = view.resolve(CompositionId::new(0));
    assert_eq!(resolved.text, "Junior Designer");
}

#[test]
fn self_referencing_pack_terminates() {
    let mut packs = IndexMap::new();
    packs.insert(
        "loop".to_string(),
        Pack::from_entries(["again: __loop__"]),
    );
    let lookup = LookupBuilder::new().build();
    let space = Space::assemble("__loop__", &lookup, &["loop".to_string()], &packs).unwrap();

    let locks = LockSet::new();
    let view = space.view(&locks).unwrap();
    let resolved = view.resolve(CompositionId::new(0));

    assert_eq!(resolved.text, "again: __loop__");
    assert_eq!(resolved.unresolved, vec!["loop"]);
}
