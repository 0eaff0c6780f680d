//! Integration tests for the persisted forms of engine types.
//!
//! Composition ids and lock sets travel through session state and URLs;
//! their serialized shapes are part of the external interface.

use varia::{locks, CompositionId, LockSet, Pack};

#[test]
fn composition_id_serializes_as_plain_integer() {
    let id = CompositionId::new(42);
    assert_eq!(serde_json::to_string(&id).unwrap(), "42");

    let back: CompositionId = serde_json::from_str("42").unwrap();
    assert_eq!(back, id);
}

#[test]
fn lock_set_serializes_as_plain_map() {
    let set = locks! { "role" => ["Senior", "Staff"] };
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"{"role":["Senior","Staff"]}"#);

    let back: LockSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn pack_wildcards_default_to_empty() {
    let pack: Pack = serde_json::from_str(r#"{"entries":["a","b"]}"#).unwrap();
    assert_eq!(pack.entries, vec!["a", "b"]);
    assert!(pack.wildcards.is_empty());
}
