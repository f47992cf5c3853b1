//! Tests for the sorted array map
//!
//! Keys must stay unique and ascending through any mix of insertions,
//! replacements and removals.

use epi_reader::{Container, ContainerError, GrowthPolicy, SortedArrayMap};
use itertools::Itertools;

use crate::utils::check_container_contract;

fn map_of(keys: &[&str]) -> SortedArrayMap<String, usize> {
    let mut map = SortedArrayMap::with_capacity(keys.len()).unwrap();
    for (index, key) in keys.iter().enumerate() {
        map.put((*key).to_string(), index).unwrap();
    }
    map
}

#[test]
fn test_keys_stay_sorted_without_duplicates() {
    let map = map_of(&["Seoul", "Busan", "Jeju-do", "Busan", "Daegu", "Seoul", "Incheon"]);

    let keys = map.keys();
    assert_eq!(keys, vec!["Busan", "Daegu", "Incheon", "Jeju-do", "Seoul"]);
    assert!(keys.iter().tuple_windows().all(|(a, b)| a < b));
    assert_eq!(map.len(), 5);
}

#[test]
fn test_put_existing_key_replaces_value() {
    let mut map = map_of(&["a", "b", "c"]);

    assert_eq!(map.put("b".to_string(), 42), Ok(Some(1)));
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("b"), Ok(&42));

    assert_eq!(map.put("d".to_string(), 7), Ok(None));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_values_follow_key_order() {
    let map = map_of(&["c", "a", "b"]);

    assert_eq!(map.values(), vec![1, 2, 0]);
    assert_eq!(
        map.iter().map(|(key, value)| format!("{key}={value}")).join(","),
        "a=1,b=2,c=0"
    );
}

#[test]
fn test_missing_keys() {
    let mut map = map_of(&["Busan", "Seoul"]);

    assert_eq!(map.get("Daegu"), Err(ContainerError::UnknownKey));
    assert_eq!(map.remove("Daegu"), Err(ContainerError::UnknownKey));
    assert!(!map.contains("Daegu"));
    assert!(map.contains("Seoul"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_empty_map_reports_empty() {
    let mut map: SortedArrayMap<String, i32> = SortedArrayMap::with_capacity(4).unwrap();

    assert_eq!(map.get("x"), Err(ContainerError::Empty));
    assert_eq!(map.remove("x"), Err(ContainerError::Empty));
    assert!(!map.contains("x"));
    assert!(map.keys().is_empty());
    assert!(map.values().is_empty());
}

#[test]
fn test_remove_keeps_order() {
    let mut map = map_of(&["d", "b", "a", "c", "e"]);

    assert_eq!(map.remove("c"), Ok(3));
    assert_eq!(map.remove("a"), Ok(2));
    assert_eq!(map.keys(), vec!["b", "d", "e"]);

    map.put("c".to_string(), 9).unwrap();
    assert_eq!(map.keys(), vec!["b", "c", "d", "e"]);
}

#[test]
fn test_growth_keeps_every_entry() {
    let mut map = SortedArrayMap::with_capacity(1).unwrap();
    let keys = (0..20).rev().map(|n| format!("key{n:02}")).collect_vec();
    for (index, key) in keys.iter().enumerate() {
        map.put(key.clone(), index).unwrap();
    }

    assert_eq!(map.len(), 20);
    assert_eq!(map.capacity(), 32);
    for (index, key) in keys.iter().enumerate() {
        assert_eq!(map.get(key.as_str()), Ok(&index));
    }
    assert_eq!(map.keys(), keys.iter().cloned().sorted().collect_vec());
}

#[test]
fn test_fixed_policy_reports_full() {
    let mut map = SortedArrayMap::with_policy(1, GrowthPolicy::Fixed).unwrap();
    map.put("a".to_string(), 1).unwrap();

    assert_eq!(
        map.put("b".to_string(), 2),
        Err(ContainerError::Full { capacity: 1 })
    );
    // Replacing needs no room
    assert_eq!(map.put("a".to_string(), 3), Ok(Some(1)));
}

#[test]
fn test_string_keys_compare_bytewise() {
    let map = map_of(&["b", "B", "a", "A", "Ä"]);

    assert_eq!(map.keys(), vec!["A", "B", "a", "b", "Ä"]);
}

#[test]
fn test_integer_keys() {
    let mut map = SortedArrayMap::with_capacity(2).unwrap();
    for key in [5, -3, 12, 0, 7] {
        map.put(key, key * 10).unwrap();
    }

    assert_eq!(map.keys(), vec![-3, 0, 5, 7, 12]);
    assert_eq!(map.get(&7), Ok(&70));
}

#[test]
fn test_map_container_contract() {
    check_container_contract(map_of(&["x", "y"]));
}
