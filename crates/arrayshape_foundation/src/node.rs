//! Nested string-keyed trees addressed by dotted paths.
//!
//! A [`Node`] is one level of a tree whose branches are ordered string
//! associations and whose leaves carry the caller's value type. Dotted keys
//! (`"a.b.c"`) descend one map level per segment. Reads are lenient — a
//! missing or non-map intermediate yields `None`, never an error — while
//! writes create intermediate maps as needed.

use serde::{Serialize, Serializer};

use crate::assoc::Assoc;

/// One level of a nested string-keyed tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<T: Clone> {
    /// A leaf value.
    Leaf(T),
    /// A nested map of further nodes.
    Map(Assoc<String, Node<T>>),
}

impl<T: Clone> Node<T> {
    /// Returns true if this node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns true if this node is a nested map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Attempts to extract the leaf value.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Map(_) => None,
        }
    }

    /// Attempts to extract the nested map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Assoc<String, Node<T>>> {
        match self {
            Self::Map(map) => Some(map),
            Self::Leaf(_) => None,
        }
    }
}

impl<T: Clone + Serialize> Serialize for Node<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(value) => value.serialize(serializer),
            Self::Map(map) => serializer.collect_map(map.iter()),
        }
    }
}

/// Resolves a dotted path to the node it addresses, leniently.
///
/// Returns `None` when any segment is missing or when descent hits a leaf
/// before the path is exhausted. An empty path addresses nothing.
#[must_use]
pub fn get_path<'a, T: Clone>(root: &'a Assoc<String, Node<T>>, path: &str) -> Option<&'a Node<T>> {
    if path.is_empty() {
        return None;
    }
    let mut segments = path.split('.');
    let mut node = root.get(segments.next()?)?;
    for segment in segments {
        node = node.as_map()?.get(segment)?;
    }
    Some(node)
}

/// Returns true if a dotted path resolves to any node, leaf or map.
#[must_use]
pub fn has_path<T: Clone>(root: &Assoc<String, Node<T>>, path: &str) -> bool {
    get_path(root, path).is_some()
}

/// Returns a new tree with `node` assigned at the dotted path.
///
/// Intermediate maps are created as needed; an intermediate leaf standing
/// where a map is required is overwritten by a map.
#[must_use]
pub fn set_path<T: Clone>(
    root: &Assoc<String, Node<T>>,
    path: &str,
    node: Node<T>,
) -> Assoc<String, Node<T>> {
    match path.split_once('.') {
        None => root.insert(path.to_string(), node),
        Some((head, rest)) => {
            let inner = match root.get(head) {
                Some(Node::Map(map)) => map.clone(),
                _ => Assoc::new(),
            };
            root.insert(head.to_string(), Node::Map(set_path(&inner, rest, node)))
        }
    }
}
