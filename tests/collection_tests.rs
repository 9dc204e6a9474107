//! Integration tests for chaining and terminal operations on collections.

use catena::stage::{FilterStage, MapStage};
use catena::{Collection, Iterable, Map, Sequence, collection};
use rstest::rstest;

// =============================================================================
// Projection
// =============================================================================

#[rstest]
fn test_keys_of_a_flipped_range() {
    let letters = collection('a'..='d');
    assert_eq!(letters.flip().keys().to_vec(), vec!['a', 'b', 'c', 'd']);
}

#[rstest]
fn test_values_drop_mixed_keys() {
    let collection = Collection::from_entries([
        ("test".to_owned(), 'a'),
        ("6".to_owned(), 'b'),
        ("234".to_owned(), 'c'),
        ("235".to_owned(), 'd'),
    ]);
    let values = collection.values();
    assert_eq!(values.to_vec(), vec!['a', 'b', 'c', 'd']);
    assert_eq!(values.keys().to_vec(), vec![0, 1, 2, 3]);
}

#[rstest]
fn test_entries_pair_keys_with_values() {
    let collection = Collection::from_entries([("test", 'a'), ("6", 'b'), ("234", 'c')]);
    let entries = collection.entries();
    assert_eq!(
        entries.to_vec(),
        vec![("test", 'a'), ("6", 'b'), ("234", 'c')]
    );
    assert_eq!(entries.keys().to_vec(), vec![0, 1, 2]);
}

// =============================================================================
// Callbacks
// =============================================================================

#[rstest]
fn test_map_receives_value_and_key() {
    let mapped = collection([6, 5, 4, 3, 2]).map(|value, key| value * key);
    assert_eq!(mapped.to_vec(), vec![0, 5, 8, 9, 8]);
}

#[rstest]
fn test_filter_keeps_keys_and_values_renumbers() {
    let filtered = collection(0..=10).filter(|value, key| *key != 3 && *value != 8);

    let array = filtered.to_array();
    assert_eq!(array.key_list(), &[0, 1, 2, 4, 5, 6, 7, 9, 10]);
    assert_eq!(array.value_list(), &[0, 1, 2, 4, 5, 6, 7, 9, 10]);

    let values = filtered.values();
    assert_eq!(values.keys().to_vec(), (0..9).collect::<Vec<usize>>());
    assert_eq!(values.to_vec(), vec![0, 1, 2, 4, 5, 6, 7, 9, 10]);
}

#[rstest]
fn test_for_each_visits_in_order() {
    let mut rendered = String::new();
    collection('a'..='d').for_each(|value, key, _| rendered.push_str(&format!("{value}-{key}")));
    assert_eq!(rendered, "a-0b-1c-2d-3");
}

#[rstest]
#[case(15, 70)]
#[case(0, 55)]
fn test_reduce_sums_with_initial(#[case] initial: i32, #[case] expected: i32) {
    let total = collection(1..=10).reduce(|carry, value, _, _| carry + value, initial);
    assert_eq!(total, expected);
}

#[rstest]
fn test_reduce_on_empty_returns_initial() {
    let empty = Sequence::<i32>::new();
    assert_eq!(empty.reduce(|carry, value, _, _| carry + value, 7), 7);
}

#[rstest]
fn test_reduce_context_marks_first_position() {
    let firsts = collection(['a', 'b', 'c']).reduce(
        |mut carry: Vec<bool>, _, _, context| {
            carry.push(context.is_first());
            carry
        },
        Vec::new(),
    );
    assert_eq!(firsts, vec![true, false, false]);
}

#[rstest]
fn test_mapper_runs_once_per_element_through_stacked_filters() {
    let calls = std::cell::Cell::new(0);
    let values = collection(0..10)
        .map(|value, _| {
            calls.set(calls.get() + 1);
            value
        })
        .filter(|_, _| true)
        .filter(|_, _| true)
        .to_vec();
    assert_eq!(values, (0..10).collect::<Vec<_>>());
    assert_eq!(calls.get(), 10);
}

#[rstest]
fn test_mapper_runs_once_per_element_through_entries_and_decompose() {
    let calls = std::cell::Cell::new(0);
    let rebuilt = collection(['a', 'b', 'c'])
        .map(|value, _| {
            calls.set(calls.get() + 1);
            value.to_ascii_uppercase()
        })
        .entries()
        .decompose()
        .join_with_keys(",", "=");
    assert_eq!(rebuilt, "0=A,1=B,2=C");
    assert_eq!(calls.get(), 3);
}

// =============================================================================
// Flip
// =============================================================================

#[rstest]
fn test_flip_swaps_keys_and_values() {
    let flipped = collection('a'..='d').flip().to_array();
    assert_eq!(flipped.key_list(), &['a', 'b', 'c', 'd']);
    assert_eq!(flipped.value_list(), &[0, 1, 2, 3]);
}

#[rstest]
fn test_flip_map_flip_transforms_keys_without_collapsing() {
    let scores = Collection::from_entries([("a", 2), ("b", 2), ("c", 2), ("d", 1)]);
    let upper = scores
        .flip()
        .map(|key, _| key.to_uppercase())
        .flip();

    let array: Map<String, i32> = upper.to_array();
    assert_eq!(array.len(), 4);
    assert_eq!(array.join_with_keys(",", "="), "A=2,B=2,C=2,D=1");
}

#[rstest]
fn test_to_array_of_a_large_sequence() {
    let sequence: Sequence<u64> = (0..100_000).collect();
    let array = sequence.to_array();
    assert_eq!(array.len(), 100_000);
    assert_eq!(array.key_list().last(), Some(&99_999));
    assert_eq!(array.value_list().last(), Some(&99_999));
    assert_eq!(array.to_array(), array);
}

#[rstest]
fn test_keyed_access_on_free_collection() {
    let mut scores = Collection::from_entries([("a", 2), ("b", 1)]);
    assert!(scores.has(&"a"));
    assert_eq!(scores.get(&"b"), Ok(&1));
    assert_eq!(scores.get(&"z"), Err(catena::CollectionError::KeyNotFound));
    scores.set("c", 0);
    scores.sort();
    assert_eq!(scores.keys().to_vec(), vec!["c", "b", "a"]);
}

#[rstest]
fn test_flip_twice_is_identity() {
    let scores = Collection::from_entries([("x", 1), ("y", 2)]);
    assert_eq!(scores.flip().flip().to_array(), scores.to_array());
}

#[rstest]
fn test_to_array_collapses_duplicate_keys() {
    let collapsed = Collection::from_entries([("a", 2), ("b", 2), ("c", 3)])
        .flip()
        .to_array();
    assert_eq!(collapsed.key_list(), &[2, 3]);
    assert_eq!(collapsed.value_list(), &["b", "c"]);
}

// =============================================================================
// Chain
// =============================================================================

#[rstest]
fn test_chain_with_explicit_stages() {
    let letters = collection('a'..='z');
    let upper = letters
        .chain::<FilterStage<_, _>>(|letter: &char, _: &usize| ('a'..='f').contains(letter))
        .chain::<MapStage<_, _>>(|letter: char, _: usize| letter.to_ascii_uppercase());
    assert_eq!(upper.to_vec(), vec!['A', 'B', 'C', 'D', 'E', 'F']);
}

#[rstest]
fn test_derived_chains_do_not_share_position() {
    let numbers = collection(1..=3);
    let doubled = numbers.map(|value, _| value * 2);
    let mut seen = Vec::new();
    doubled.for_each(|value, _, _| {
        seen.push(value);
        seen.extend(numbers.to_vec());
    });
    assert_eq!(seen, vec![2, 1, 2, 3, 4, 1, 2, 3, 6, 1, 2, 3]);
}

// =============================================================================
// Joining
// =============================================================================

#[rstest]
fn test_join_and_display() {
    let letters = collection('a'..='d');
    assert_eq!(letters.join(","), "a,b,c,d");
    assert_eq!(letters.to_string(), "a,b,c,d");
    assert_eq!(letters.join(":"), "a:b:c:d");
    assert_eq!(letters.join_with_keys(":", ";"), "0;a:1;b:2;c:3;d");
}

#[rstest]
fn test_join_with_keys_on_two_items() {
    assert_eq!(collection(['a', 'b']).join_with_keys(",", ";"), "0;a,1;b");
}

#[rstest]
fn test_count_after_filter() {
    let evens = collection(0..100).filter(|value, _| value % 2 == 0);
    assert_eq!(evens.count(), 50);
}
