//! Integration tests for OrderedList
//!
//! Tests shape-validated construction, the lenient/strict accessor split,
//! key preservation across transforms, and the in-place mutators.

use arrayshape_collections::OrderedList;
use arrayshape_foundation::ErrorKind;

fn list(values: &[i64]) -> OrderedList<i64> {
    OrderedList::from_values(values.iter().copied())
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn create_round_trips_contiguous_sequences() {
    let l = OrderedList::create((0..5).map(|i| (i, i * 10))).unwrap();
    assert_eq!(l.to_vec(), vec![0, 10, 20, 30, 40]);
}

#[test]
fn create_rejects_any_gap() {
    for missing in 0..3usize {
        let entries = (0..4usize).filter(|k| *k != missing).map(|k| (k, k));
        let err = OrderedList::create(entries).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidListShape));
    }
}

#[test]
fn empty_list_properties() {
    let l = OrderedList::<i64>::empty();
    assert!(l.is_empty());
    assert_eq!(l.count(), 0);
    assert!(l.head().is_err());
}

// =============================================================================
// Lenient vs. Strict Access
// =============================================================================

#[test]
fn get_is_lenient_and_try_get_is_strict() {
    let l = list(&[10, 20]);

    assert_eq!(l.get(5), None);
    let err = l.try_get(5).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::KeyNotFound { .. }));
    assert_eq!(l.try_get(1).unwrap(), &20);
}

#[test]
fn head_throws_where_first_does_not() {
    let empty = OrderedList::<i64>::empty();
    assert!(matches!(
        empty.head().unwrap_err().kind,
        ErrorKind::FirstElementMissing
    ));
    assert_eq!(empty.first(), None);

    let l = list(&[10, 20]);
    assert_eq!(l.head().unwrap(), &10);
    assert_eq!(l.first(), Some(&10));
}

// =============================================================================
// Key Preservation
// =============================================================================

#[test]
fn filter_then_values_reindexes() {
    let l = list(&[1, 2, 3, 4]).filter(|v| v % 2 == 0);

    assert_eq!(l.to_entries(), vec![(1, 2), (3, 4)]);
    assert_eq!(l.values().to_entries(), vec![(0, 2), (1, 4)]);
}

#[test]
fn unique_retains_original_indices() {
    let l = list(&[1, 2, 2, 3, 1]).unique();
    assert_eq!(l.to_entries(), vec![(0, 1), (1, 2), (3, 3)]);
    assert_eq!(l.values().to_vec(), vec![1, 2, 3]);
}

#[test]
fn diff_retains_original_indices() {
    let l = list(&[1, 2, 3]).diff(&list(&[2]));
    assert_eq!(l.to_entries(), vec![(0, 1), (2, 3)]);
}

#[test]
fn reverse_then_values_renumbers() {
    let l = list(&[1, 2, 3]).reverse();
    assert_eq!(l.to_entries(), vec![(2, 3), (1, 2), (0, 1)]);
    assert_eq!(l.values().to_entries(), vec![(0, 3), (1, 2), (2, 1)]);
}

// =============================================================================
// In-Place Mutators vs. Copy-on-Write
// =============================================================================

#[test]
fn push_and_pop_mutate_while_add_copies() {
    let mut l = list(&[1]);

    l.push(2);
    assert_eq!(l.to_vec(), vec![1, 2]);

    let copied = l.add(3);
    assert_eq!(l.to_vec(), vec![1, 2]);
    assert_eq!(copied.to_vec(), vec![1, 2, 3]);

    assert_eq!(l.pop(), Some(2));
    assert_eq!(l.to_vec(), vec![1]);
}

#[test]
fn transforms_never_touch_the_receiver() {
    let l = list(&[3, 1, 2]);
    let _ = l.sort_by_key(|v| *v);
    let _ = l.filter(|v| *v > 1);
    let _ = l.reverse();
    let _ = l.put(0, 99);
    let _ = l.splice(0, Some(1), []);
    assert_eq!(l.to_vec(), vec![3, 1, 2]);
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn chained_pipeline_reads_naturally() {
    let names = OrderedList::from_values(vec!["ada", "grace", "alan", "edsger"])
        .filter(|name| name.len() > 3)
        .values()
        .sort_by_key(|name| name.to_string())
        .transform(|name| name.to_uppercase());

    assert_eq!(names.to_vec(), vec!["ALAN", "EDSGER", "GRACE"]);
}

#[test]
fn chunk_collapse_round_trip() {
    let l = list(&[1, 2, 3, 4, 5]);
    assert_eq!(l.chunk(2).collapse().to_vec(), l.to_vec());
}

#[test]
fn transform_flat_equals_transform_then_collapse() {
    let l = list(&[1, 2, 3]);
    let flat = l.transform_flat(|v| vec![*v, -v]);
    let collapsed = l.transform(|v| OrderedList::from_values(vec![*v, -v])).collapse();
    assert_eq!(flat, collapsed);
}

#[test]
fn reduce_after_filter_sees_surviving_elements_only() {
    let total = list(&[1, 2, 3, 4]).filter(|v| v % 2 == 0).reduce(|a, v| a + v);
    assert_eq!(total, Some(6));
}

#[test]
fn splice_variants() {
    let l = list(&[1, 2, 3, 4, 5]);

    // Removal only, to the end.
    assert_eq!(l.splice(3, None, []).to_vec(), vec![1, 2, 3]);
    // Replacement of a middle run.
    assert_eq!(l.splice(1, Some(3), [9]).to_vec(), vec![1, 9, 5]);
    // Offset past the end degrades to append.
    assert_eq!(l.splice(99, None, [7]).to_vec(), vec![1, 2, 3, 4, 5, 7]);
}
