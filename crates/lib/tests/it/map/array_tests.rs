//! Array-style helper tests
//!
//! Covers filter, map, split, concat, positional lookups and first/last access.

use ordstore::OrderedMap;

use crate::helpers::*;

// ===== FILTER =====

#[test]
fn test_filter_by_value() {
    let map = abc_map();
    let filtered = map.filter(|v, _, _, _| *v > 1);

    assert_pairs(&filtered, &[("b", 2), ("c", 3)]);
    // source untouched
    assert_eq!(map.len(), 3);
}

#[test]
fn test_filter_with_captured_context() {
    let map = abc_map();
    let allowed = ["a", "c"];
    let filtered = map.filter(|_, k, _, _| allowed.contains(&k.as_str()));
    assert_pairs(&filtered, &[("a", 1), ("c", 3)]);
}

#[test]
fn test_filter_result_is_independent() {
    let map = abc_map();
    let mut filtered = map.filter(|_, _, _, _| true);
    filtered.set("a".to_string(), 100);
    filtered.delete("b");

    assert_pairs(&map, &[("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_filter_on_empty_map() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    let mut calls = 0;
    let filtered = map.filter(|_, _, _, _| {
        calls += 1;
        true
    });
    assert!(filtered.is_empty());
    assert_eq!(calls, 0);
}

// ===== MAP =====

#[test]
fn test_map_collects_in_order() {
    let map = abc_map();
    let doubled = map.map(|v, _, _, _| v * 2);
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_map_sees_container() {
    let map = abc_map();
    let shares = map.map(|v, _, _, m| {
        let total: i32 = m.values().into_iter().sum();
        *v as f64 / total as f64
    });
    assert_eq!(shares.len(), 3);
    assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-9);
}

// ===== SPLIT =====

#[test]
fn test_split_partitions_in_order() {
    let map = abc_map();
    let (big, small) = map.split(|v, _, _, _| *v > 1);

    assert_pairs(&big, &[("b", 2), ("c", 3)]);
    assert_pairs(&small, &[("a", 1)]);
}

#[test]
fn test_split_all_one_side() {
    let map = abc_map();
    let (all, none) = map.split(|_, _, _, _| true);
    assert_eq!(all, map);
    assert!(none.is_empty());
}

// ===== CONCAT =====

#[test]
fn test_concat_merges_every_pair() {
    let a = create_map(&[("x", 1)]);
    let b = create_map(&[("y", 2), ("z", 3)]);

    let merged = a.concat([&b]);

    // all of b is merged, including its second pair
    assert_pairs(&merged, &[("x", 1), ("y", 2), ("z", 3)]);
    assert!(merged.has("z"));
}

#[test]
fn test_concat_multiple_sources_in_argument_order() {
    let a = create_map(&[("x", 1)]);
    let b = create_map(&[("y", 2)]);
    let c = create_map(&[("x", 10), ("w", 4)]);

    let merged = a.concat([&b, &c]);
    assert_pairs(&merged, &[("x", 10), ("y", 2), ("w", 4)]);

    // sources untouched
    assert_pairs(&a, &[("x", 1)]);
    assert_pairs(&c, &[("x", 10), ("w", 4)]);
}

#[test]
fn test_concat_with_nothing_is_a_clone() {
    let a = abc_map();
    let merged = a.concat(Vec::<&OrderedMap<String, i32>>::new());
    assert_eq!(merged, a);
}

#[test]
fn test_concat_from_slice() {
    let a = create_map(&[("x", 1)]);
    let others = vec![create_map(&[("y", 2)]), create_map(&[("z", 3)])];

    let merged = a.concat(&others);
    assert_pairs(&merged, &[("x", 1), ("y", 2), ("z", 3)]);
}

// ===== POSITIONAL LOOKUPS =====

#[test]
fn test_index_of() {
    let map = abc_map();
    assert_eq!(map.index_of("a"), Some(0));
    assert_eq!(map.index_of("b"), Some(1));
    assert_eq!(map.index_of("missing"), None);
}

#[test]
fn test_index_of_from() {
    let map = abc_map();
    assert_eq!(map.index_of_from("c", 0), Some(2));
    assert_eq!(map.index_of_from("c", 2), Some(2));
    assert_eq!(map.index_of_from("a", 1), None);
    assert_eq!(map.index_of_from("a", 100), None);
}

#[test]
fn test_last_index_of_from() {
    let map = abc_map();
    assert_eq!(map.last_index_of("c"), Some(2));
    assert_eq!(map.last_index_of_from("c", 2), Some(2));
    assert_eq!(map.last_index_of_from("c", 1), None);
    assert_eq!(map.last_index_of_from("a", 0), Some(0));
}

#[test]
fn test_index_of_on_empty_map() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert_eq!(map.index_of("a"), None);
    assert_eq!(map.last_index_of("a"), None);
}

#[test]
fn test_index_tracks_deletes() {
    let mut map = abc_map();
    map.delete("a");
    assert_eq!(map.index_of("b"), Some(0));
    assert_eq!(map.index_of("c"), Some(1));
}

// ===== FIRST / LAST =====

#[test]
fn test_first_and_last() {
    let map = abc_map();
    assert_eq!(map.first(), Some(&1));
    assert_eq!(map.last(), Some(&3));
    assert_eq!(map.first_key().map(String::as_str), Some("a"));
    assert_eq!(map.last_key().map(String::as_str), Some("c"));
}

#[test]
fn test_first_and_last_on_empty_map() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert_eq!(map.first(), None);
    assert_eq!(map.first_key(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.last_key(), None);
}
