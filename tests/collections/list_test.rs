//! Tests for the rank-addressed list
//!
//! Covers insertion and removal shifting, rank validation, growth and the
//! fixed-capacity policy.

use epi_reader::{ArrayList, Container, ContainerError, GrowthPolicy};

use crate::utils::check_container_contract;

fn list_of(values: &[i32]) -> ArrayList<i32> {
    let mut list = ArrayList::with_capacity(values.len()).unwrap();
    for value in values {
        list.push(*value).unwrap();
    }
    list
}

fn contents(list: &ArrayList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_add_shifts_later_elements() {
    let mut list = list_of(&[10, 20, 30]);

    list.add(1, 15).unwrap();
    assert_eq!(contents(&list), vec![10, 15, 20, 30]);

    list.add(0, 5).unwrap();
    list.add(list.len(), 35).unwrap();
    assert_eq!(contents(&list), vec![5, 10, 15, 20, 30, 35]);
    assert_eq!(list.get(1), Ok(&10));
}

#[test]
fn test_add_then_remove_restores_size() {
    let mut list = list_of(&[1, 2, 3, 4]);

    for rank in 0..=list.len() {
        let size = list.len();
        list.add(rank, 99).unwrap();
        assert_eq!(list.get(rank), Ok(&99));
        assert_eq!(list.remove(rank), Ok(99));
        assert_eq!(list.len(), size);
    }
    assert_eq!(contents(&list), vec![1, 2, 3, 4]);
}

#[test]
fn test_remove_shifts_later_elements_back() {
    let mut list = list_of(&[1, 2, 3, 4]);

    assert_eq!(list.remove(1), Ok(2));
    assert_eq!(contents(&list), vec![1, 3, 4]);
    assert_eq!(list.remove(2), Ok(4));
    assert_eq!(list.remove(0), Ok(1));
    assert_eq!(contents(&list), vec![3]);
}

#[test]
fn test_invalid_ranks() {
    let mut list = list_of(&[1, 2]);

    assert_eq!(
        list.add(3, 0),
        Err(ContainerError::InvalidRank { rank: 3, size: 2 })
    );
    assert_eq!(
        list.get(2),
        Err(ContainerError::InvalidRank { rank: 2, size: 2 })
    );
    assert_eq!(
        list.remove(5),
        Err(ContainerError::InvalidRank { rank: 5, size: 2 })
    );
    assert_eq!(
        list.set(2, 0),
        Err(ContainerError::InvalidRank { rank: 2, size: 2 })
    );
    assert_eq!(list.len(), 2);
}

#[test]
fn test_empty_list_reports_empty() {
    let mut list: ArrayList<i32> = ArrayList::with_capacity(4).unwrap();

    assert!(list.is_empty());
    assert_eq!(list.get(0), Err(ContainerError::Empty));
    assert_eq!(list.remove(0), Err(ContainerError::Empty));
    assert_eq!(list.set(0, 1), Err(ContainerError::Empty));
}

#[test]
fn test_set_replaces_in_place() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.set(1, 20), Ok(2));
    assert_eq!(contents(&list), vec![1, 20, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_growth_keeps_every_element() {
    let mut list = ArrayList::with_capacity(2).unwrap();
    for value in 0..9 {
        list.push(value).unwrap();
    }

    assert_eq!(list.len(), 9);
    assert!(list.capacity() >= 9);
    assert_eq!(list.capacity(), 16);
    assert_eq!(contents(&list), (0..9).collect::<Vec<_>>());
}

#[test]
fn test_zero_capacity_grows() {
    let mut list = ArrayList::with_capacity(0).unwrap();
    list.push("first").unwrap();

    assert_eq!(list.capacity(), 1);
    assert_eq!(list.get(0), Ok(&"first"));
}

#[test]
fn test_fixed_policy_reports_full() {
    let mut list = ArrayList::with_policy(2, GrowthPolicy::Fixed).unwrap();
    list.push(1).unwrap();
    list.push(2).unwrap();

    assert_eq!(list.push(3), Err(ContainerError::Full { capacity: 2 }));
    assert_eq!(list.add(0, 3), Err(ContainerError::Full { capacity: 2 }));
    assert_eq!(contents(&list), vec![1, 2]);

    list.remove(0).unwrap();
    list.push(3).unwrap();
    assert_eq!(contents(&list), vec![2, 3]);
}

#[test]
fn test_impossible_allocation_reports_no_memory() {
    let result = ArrayList::<u64>::with_capacity(usize::MAX);
    assert!(matches!(result, Err(ContainerError::NoMemory)));
}

#[test]
fn test_list_container_contract() {
    check_container_contract(list_of(&[1, 2, 3]));
}

#[test]
fn test_destroy_consumes_list() {
    let list = list_of(&[1, 2, 3]);
    let mut handle = Some(list);

    if let Some(list) = handle.take() {
        list.destroy();
    }
    assert!(epi_reader::is_empty_or_null(handle.as_ref()));
    assert_eq!(
        epi_reader::size_of(handle.as_ref()),
        Err(ContainerError::NullContainer)
    );
}
