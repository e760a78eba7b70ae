//! String-keyed map with dot-path access and shape-validated construction.

use std::fmt;

use serde::{Serialize, Serializer};

use arrayshape_foundation::{Assoc, Error, Node, Result, get_path, has_path, is_list_shape, set_path};

use crate::list::OrderedList;

/// An immutable, string-keyed map addressable by dotted paths.
///
/// Construction through [`KeyedMap::create`] rejects list-shaped input —
/// the inverse of the [`OrderedList`] invariant. Dotted keys (`"a.b.c"`)
/// descend through nested maps created by [`KeyedMap::set`]. Insertion
/// order is preserved for iteration.
///
/// Entry-wise operations (`transform`, `filter`, `each`, `search_by`,
/// `convert_to_list`) visit direct leaf values; nested maps are carried
/// through untouched. Dotted paths are the way to reach nested levels.
///
/// Every operation returns a new map, except the documented in-place
/// mutator [`KeyedMap::put`].
#[derive(Clone)]
pub struct KeyedMap<T: Clone> {
    entries: Assoc<String, Node<T>>,
}

impl<T: Clone> KeyedMap<T> {
    /// Creates a map from keyed entries, validating the map shape.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidMapShape`](arrayshape_foundation::ErrorKind::InvalidMapShape)
    /// when the entries are non-empty and list-shaped (keys exactly
    /// `"0".."n-1"` in order).
    pub fn create<K, I>(entries: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let entries: Assoc<String, Node<T>> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), Node::Leaf(v)))
            .collect();
        if !entries.is_empty() && is_list_shape(entries.keys()) {
            Err(Error::invalid_map_shape())
        } else {
            Ok(Self { entries })
        }
    }

    /// Creates an empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Assoc::new(),
        }
    }

    /// Wraps an already-built tree, bypassing shape validation. Internal
    /// constructors (grouping, `flip`, sub-map access) come through here.
    pub(crate) fn from_assoc(entries: Assoc<String, Node<T>>) -> Self {
        Self { entries }
    }

    /// Gets the leaf value at a dotted path, leniently.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&T> {
        get_path(&self.entries, path)?.as_leaf()
    }

    /// Gets the nested map at a dotted path, leniently.
    #[must_use]
    pub fn get_map(&self, path: &str) -> Option<Self> {
        match get_path(&self.entries, path)? {
            Node::Map(map) => Some(Self::from_assoc(map.clone())),
            Node::Leaf(_) => None,
        }
    }

    /// Gets the leaf value at a dotted path, strictly.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::KeyNotFound`](arrayshape_foundation::ErrorKind::KeyNotFound)
    /// when the path does not resolve to a leaf.
    pub fn try_get(&self, path: &str) -> Result<&T> {
        self.get(path).ok_or_else(|| Error::key_not_found(path))
    }

    /// Returns true if a dotted path resolves to a leaf or a nested map.
    #[must_use]
    pub fn has(&self, path: &str) -> bool {
        has_path(&self.entries, path)
    }

    /// Returns true if a direct (non-dotted) key is present.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if the key is absent, or present with an empty nested
    /// map. A present leaf value is never empty.
    #[must_use]
    pub fn is_empty_by_key(&self, key: &str) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(Node::Leaf(_)) => false,
            Some(Node::Map(map)) => map.is_empty(),
        }
    }

    /// Returns a new map with the value assigned at the dotted path.
    ///
    /// Intermediate maps are created as needed; a leaf standing where a
    /// map is required is overwritten.
    #[must_use]
    pub fn set(&self, path: &str, value: T) -> Self {
        Self {
            entries: set_path(&self.entries, path, Node::Leaf(value)),
        }
    }

    /// Assigns a direct key in place. The documented mutating exception;
    /// the copy-on-write path is [`KeyedMap::set`].
    pub fn put(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert_mut(key.into(), Node::Leaf(value));
    }

    /// Returns a new map without the direct key.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        Self {
            entries: self.entries.remove(key),
        }
    }

    /// Returns a new map with `f(value, key)` applied to every direct
    /// leaf entry. Keys and nested maps are preserved.
    #[must_use]
    pub fn transform(&self, mut f: impl FnMut(&T, &str) -> T) -> Self {
        Self {
            entries: self.entries.map_values(|k, node| match node {
                Node::Leaf(value) => Node::Leaf(f(value, k)),
                Node::Map(map) => Node::Map(map.clone()),
            }),
        }
    }

    /// Invokes `f(value, key)` for every direct leaf entry in insertion
    /// order; returns an equivalent copy.
    pub fn each(&self, mut f: impl FnMut(&T, &str)) -> Self {
        for (k, node) in self.entries.iter() {
            if let Node::Leaf(value) = node {
                f(value, k);
            }
        }
        self.clone()
    }

    /// Returns a new map keeping leaf entries the predicate accepts.
    ///
    /// Keys are preserved; nested maps are kept untouched.
    #[must_use]
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self {
        Self {
            entries: self.entries.filter(|_, node| match node {
                Node::Leaf(value) => pred(value),
                Node::Map(_) => true,
            }),
        }
    }

    /// Returns the value of the first leaf entry the predicate accepts.
    pub fn search_by(&self, mut pred: impl FnMut(&T, &str) -> bool) -> Option<&T> {
        self.entries.iter().find_map(|(k, node)| match node {
            Node::Leaf(value) if pred(value, k) => Some(value),
            _ => None,
        })
    }

    /// Returns the shallow merge of this map and another.
    ///
    /// On key collision the entry from `other` wins; its new keys are
    /// appended in its order.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            entries: self.entries.union(&other.entries),
        }
    }

    /// Returns entries whose keys also exist in `other`.
    #[must_use]
    pub fn intersection_by_keys(&self, other: &Self) -> Self {
        Self {
            entries: self
                .entries
                .filter(|k, _| other.entries.contains_key(k.as_str())),
        }
    }

    /// Returns the direct leaf values as a list, in iteration order.
    ///
    /// Keys are discarded; nested maps are skipped.
    #[must_use]
    pub fn convert_to_list(&self) -> OrderedList<T> {
        OrderedList::from_values(self.entries.values().filter_map(Node::as_leaf).cloned())
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of direct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over direct keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over direct entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node<T>)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Returns the direct entries, in insertion order.
    #[must_use]
    pub fn to_entries(&self) -> Vec<(String, Node<T>)> {
        self.entries
            .iter()
            .map(|(k, node)| (k.clone(), node.clone()))
            .collect()
    }

    /// Encodes the map as a JSON object, nested maps recursing.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Serialization`](arrayshape_foundation::ErrorKind::Serialization)
    /// when a value refuses to encode.
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Applies `f` to the whole map and returns its result.
    pub fn pipe<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        f(self)
    }
}

impl<T: Clone> Default for KeyedMap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for KeyedMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for KeyedMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Clone + Eq> Eq for KeyedMap<T> {}

impl<T: Clone + Serialize> Serialize for KeyedMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}
