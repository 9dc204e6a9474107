#![cfg(feature = "serde")]

//! Integration tests for the external representation and text round trips.

use catena::codec::TextSerializable;
use catena::prelude::*;
use rstest::rstest;

// =============================================================================
// Representation
// =============================================================================

#[rstest]
fn test_lists_serialize_as_sequences() {
    assert_eq!(
        serde_json::to_string(&catena::sequence([1, 2, 3])).unwrap(),
        "[1,2,3]"
    );
    assert_eq!(
        serde_json::to_string(&catena::stack(['a', 'b'])).unwrap(),
        r#"["a","b"]"#
    );
    assert_eq!(
        serde_json::to_string(&catena::set([2, 2, 1])).unwrap(),
        "[2,1]"
    );
    assert_eq!(
        serde_json::to_string(&catena::queue([1], Direction::Filo)).unwrap(),
        "[1]"
    );
}

#[rstest]
fn test_map_serializes_as_ordered_entries() {
    let map = catena::map([(3, "c"), (1, "a")]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"[[3,"c"],[1,"a"]]"#);

    let restored: Map<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.key_list(), &[3, 1]);
}

#[rstest]
fn test_map_with_structured_keys_round_trips() {
    let map = catena::map([(vec![0.5, 1.5], 'a'), (vec![], 'b')]);
    let json = serde_json::to_string(&map).unwrap();
    let restored: Map<Vec<f64>, char> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, map);
}

#[rstest]
fn test_free_collection_serializes_as_ordered_entries() {
    let collection = catena::collection(['x', 'y']);
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, r#"[[0,"x"],[1,"y"]]"#);

    let restored: Collection<catena::stage::EntriesCursor<usize, char>> =
        serde_json::from_str(&json).unwrap();
    assert_eq!(restored.get(&1), Ok(&'y'));
    assert_eq!(restored.join(""), "xy");
}

#[rstest]
fn test_deserialized_set_drops_duplicates() {
    let set: Set<String> = serde_json::from_str(r#"["x","y","x"]"#).unwrap();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_map_rejects_rows_that_are_not_pairs() {
    let result: serde_json::Result<Map<i32, i32>> = serde_json::from_str("[[1,2],[3]]");
    assert!(result.is_err());
}

// =============================================================================
// TextSerializable
// =============================================================================

#[rstest]
fn test_text_round_trip_for_every_container() {
    let sequence = catena::sequence(['a', 'b']);
    let mut restored_sequence = Sequence::new();
    restored_sequence
        .deserialize_from_str(&sequence.serialize_to_string().unwrap())
        .unwrap();
    assert_eq!(restored_sequence, sequence);

    let stack = catena::stack([1, 2, 3]);
    let mut restored_stack = Stack::new();
    restored_stack
        .deserialize_from_str(&stack.serialize_to_string().unwrap())
        .unwrap();
    assert_eq!(restored_stack, stack);

    let set = catena::set(["x", "y"].map(String::from));
    let mut restored_set = Set::new();
    restored_set
        .deserialize_from_str(&set.serialize_to_string().unwrap())
        .unwrap();
    assert_eq!(restored_set, set);

    let map = catena::map([("k".to_owned(), 1.5)]);
    let mut restored_map = Map::new();
    restored_map
        .deserialize_from_str(&map.serialize_to_string().unwrap())
        .unwrap();
    assert_eq!(restored_map, map);
}

#[rstest]
#[case(Direction::Lifo)]
#[case(Direction::Fifo)]
#[case(Direction::Lilo)]
#[case(Direction::Filo)]
fn test_queue_restores_items_under_its_own_direction(#[case] direction: Direction) {
    let source = catena::queue(['a', 'b', 'c'], Direction::Fifo);
    let mut restored = catena::queue(Vec::<char>::new(), direction);
    restored
        .deserialize_from_str(&source.serialize_to_string().unwrap())
        .unwrap();
    assert_eq!(restored.direction(), direction);
    assert_eq!(restored.as_slice(), source.as_slice());
}

#[rstest]
fn test_invalid_text_is_a_serialization_error() {
    let mut sequence = catena::sequence([1, 2]);
    let result = sequence.deserialize_from_str("[1, \"two\"]");
    assert!(matches!(
        result,
        Err(CollectionError::Serialization { .. })
    ));
    assert_eq!(sequence.as_slice(), &[1, 2]);
}
