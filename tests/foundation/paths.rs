//! Integration tests for dot-path access over nested trees

use arrayshape_foundation::{Assoc, Node, get_path, has_path, set_path};

fn leaf(n: i64) -> Node<i64> {
    Node::Leaf(n)
}

// =============================================================================
// Descent
// =============================================================================

#[test]
fn three_level_round_trip() {
    let root = set_path(&Assoc::new(), "app.cache.ttl", leaf(60));

    assert_eq!(get_path(&root, "app.cache.ttl"), Some(&leaf(60)));
    assert!(has_path(&root, "app.cache"));
    assert!(!has_path(&root, "app.cache.size"));
}

#[test]
fn lenient_reads_never_fail() {
    let root = set_path(&Assoc::new(), "a", leaf(1));

    assert_eq!(get_path(&root, "missing"), None);
    assert_eq!(get_path(&root, "a.b.c"), None);
    assert_eq!(get_path(&root, ""), None);
}

#[test]
fn intermediate_nodes_are_maps() {
    let root = set_path(&Assoc::new(), "a.b.c", leaf(1));

    assert!(get_path(&root, "a").is_some_and(Node::is_map));
    assert!(get_path(&root, "a.b").is_some_and(Node::is_map));
    assert!(get_path(&root, "a.b.c").is_some_and(Node::is_leaf));
}

// =============================================================================
// Assignment
// =============================================================================

#[test]
fn deep_set_keeps_unrelated_branches() {
    let root = set_path(&Assoc::new(), "a.x", leaf(1));
    let root = set_path(&root, "b.y", leaf(2));
    let root = set_path(&root, "a.z", leaf(3));

    assert_eq!(get_path(&root, "a.x"), Some(&leaf(1)));
    assert_eq!(get_path(&root, "b.y"), Some(&leaf(2)));
    assert_eq!(get_path(&root, "a.z"), Some(&leaf(3)));
}

#[test]
fn set_overwrites_a_leaf_with_a_map_when_descending() {
    let root = set_path(&Assoc::new(), "a", leaf(1));
    let root = set_path(&root, "a.b", leaf(2));

    assert_eq!(get_path(&root, "a.b"), Some(&leaf(2)));
    assert_eq!(get_path(&root, "a").and_then(Node::as_leaf), None);
}

#[test]
fn set_is_copy_on_write_at_every_level() {
    let before = set_path(&Assoc::new(), "a.b.c", leaf(1));
    let after = set_path(&before, "a.b.c", leaf(2));

    assert_eq!(get_path(&before, "a.b.c"), Some(&leaf(1)));
    assert_eq!(get_path(&after, "a.b.c"), Some(&leaf(2)));
}

#[test]
fn node_accessors_discriminate() {
    let map_node: Node<i64> = Node::Map(Assoc::new());

    assert!(leaf(1).is_leaf());
    assert!(!leaf(1).is_map());
    assert_eq!(leaf(7).as_leaf(), Some(&7));
    assert!(map_node.as_leaf().is_none());
    assert!(map_node.as_map().is_some());
}
