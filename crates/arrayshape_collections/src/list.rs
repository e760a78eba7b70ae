//! Ordered, integer-indexed list with shape-validated construction.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use serde::{Serialize, Serializer};

use arrayshape_foundation::{Assoc, Error, Node, Result, is_list_shape};

use crate::map::KeyedMap;

/// Supplies the value uniqueness filtering compares when elements carry
/// their own identity.
pub trait DistinctionKey {
    /// Returns the value identifying this element for uniqueness.
    ///
    /// The key may combine several properties for multi-column
    /// distinctness.
    fn distinction_key(&self) -> String;
}

/// An immutable, integer-indexed sequence.
///
/// Construction through [`OrderedList::create`] requires the keys to be
/// exactly the contiguous run `0..n-1`. Key-preserving transforms
/// (`filter`, `unique`, `diff`, `reverse`, `sort_by_key`) may leave the
/// indices sparse afterwards; [`OrderedList::values`] renumbers them.
///
/// Every operation returns a new list, except the two documented in-place
/// mutators [`OrderedList::push`] and [`OrderedList::pop`].
#[derive(Clone)]
pub struct OrderedList<T: Clone> {
    entries: Assoc<usize, T>,
}

impl<T: Clone> OrderedList<T> {
    /// Creates a list from keyed entries, validating the list shape.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidListShape`](arrayshape_foundation::ErrorKind::InvalidListShape)
    /// unless the keys are exactly `0..n-1`, in order.
    pub fn create<I: IntoIterator<Item = (usize, T)>>(entries: I) -> Result<Self> {
        let entries: Assoc<usize, T> = entries.into_iter().collect();
        if is_list_shape(entries.keys()) {
            Ok(Self { entries })
        } else {
            Err(Error::invalid_list_shape())
        }
    }

    /// Creates a list from values, indexed contiguously from 0.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            entries: values.into_iter().enumerate().collect(),
        }
    }

    /// Creates an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Assoc::new(),
        }
    }

    /// Gets the element at an index, leniently.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(&index)
    }

    /// Returns true if an element exists at the index.
    #[must_use]
    pub fn has(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Gets the element at an index, strictly.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::KeyNotFound`](arrayshape_foundation::ErrorKind::KeyNotFound)
    /// when the index is absent.
    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.get(index)
            .ok_or_else(|| Error::key_not_found(index.to_string()))
    }

    /// Returns the element at index 0.
    ///
    /// The check is on the key, not the length: a non-empty list whose
    /// index 0 was filtered away has no head.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::FirstElementMissing`](arrayshape_foundation::ErrorKind::FirstElementMissing)
    /// when index 0 is absent.
    pub fn head(&self) -> Result<&T> {
        self.get(0).ok_or_else(Error::first_element_missing)
    }

    /// Returns the positionally first element, leniently.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Returns the positionally last element, leniently.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends in place. One of the two documented in-place mutators; the
    /// copy-on-write sibling is [`OrderedList::add`].
    pub fn push(&mut self, item: T) {
        let key = self.next_key();
        self.entries.insert_mut(key, item);
    }

    /// Removes and returns the positionally last element, in place.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_last().map(|(_, v)| v)
    }

    /// Returns a new list with the item appended at `max_key + 1`.
    #[must_use]
    pub fn add(&self, item: T) -> Self {
        Self {
            entries: self.entries.insert(self.next_key(), item),
        }
    }

    /// Returns a new list with the item assigned at the index.
    ///
    /// Assigning past the end creates a sparse position; `values()`
    /// renumbers when contiguity is wanted back.
    #[must_use]
    pub fn put(&self, index: usize, item: T) -> Self {
        Self {
            entries: self.entries.insert(index, item),
        }
    }

    /// Returns a new list keeping elements the predicate accepts.
    ///
    /// Indices are preserved, not renumbered; follow with
    /// [`OrderedList::values`] to reindex.
    #[must_use]
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self {
        Self {
            entries: self.entries.filter(|_, v| pred(v)),
        }
    }

    /// Returns a copy with indices reset to `0..n-1`, preserving order.
    #[must_use]
    pub fn values(&self) -> Self {
        Self::from_values(self.entries.values().cloned())
    }

    /// Returns a new list sorted ascending by `f(item)`.
    ///
    /// The sort is stable and the original indices ride along with their
    /// elements.
    #[must_use]
    pub fn sort_by_key<S: Ord>(&self, f: impl FnMut(&T) -> S) -> Self {
        Self {
            entries: self.entries.sorted_by_key(f),
        }
    }

    /// Returns the first element equal to `item`, or `None`.
    #[must_use]
    pub fn search(&self, item: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.entries.values().find(|v| *v == item)
    }

    /// Returns the first element the predicate accepts, or `None`.
    ///
    /// The predicate receives the element and its index.
    pub fn search_by(&self, mut pred: impl FnMut(&T, usize) -> bool) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, v)| pred(v, **k))
            .map(|(_, v)| v)
    }

    /// Returns true if any element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.entries.values().any(|v| v == item)
    }

    /// Returns true if any element satisfies the predicate.
    pub fn contains_by(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.entries.values().any(|v| pred(v))
    }

    /// Returns a new list with every element replaced by `f(item)`.
    ///
    /// One-to-one: same length, same indices, order preserved.
    #[must_use]
    pub fn transform<U: Clone>(&self, mut f: impl FnMut(&T) -> U) -> OrderedList<U> {
        OrderedList {
            entries: self.entries.map_values(|_, v| f(v)),
        }
    }

    /// Maps each element to a sequence and flattens one level.
    ///
    /// The result is reindexed from 0.
    #[must_use]
    pub fn transform_flat<U, I>(&self, mut f: impl FnMut(&T) -> I) -> OrderedList<U>
    where
        U: Clone,
        I: IntoIterator<Item = U>,
    {
        OrderedList::from_values(self.entries.values().flat_map(|v| f(v)))
    }

    /// Splits the list into consecutive chunks of `size` elements.
    ///
    /// The last chunk may be shorter; chunks are reindexed from 0.
    /// A zero size yields an empty outer list.
    #[must_use]
    pub fn chunk(&self, size: usize) -> OrderedList<OrderedList<T>> {
        if size == 0 {
            return OrderedList::empty();
        }
        let values = self.to_vec();
        OrderedList::from_values(
            values
                .chunks(size)
                .map(|chunk| OrderedList::from_values(chunk.iter().cloned())),
        )
    }

    /// Invokes `f` with a snapshot of the list, for side effects only.
    ///
    /// Returns a new instance with unchanged contents; nothing `f` does to
    /// the snapshot propagates back.
    #[must_use]
    pub fn tap(&self, f: impl FnOnce(Self)) -> Self {
        f(self.clone());
        self.clone()
    }

    /// Invokes `f(item, index)` for every element in order.
    ///
    /// Runs to completion and returns an equivalent copy.
    pub fn each(&self, mut f: impl FnMut(&T, usize)) -> Self {
        for (k, v) in self.entries.iter() {
            f(v, *k);
        }
        self.clone()
    }

    /// Removes a run of elements and optionally inserts a replacement.
    ///
    /// Removes `length` elements starting at `offset` (to the end when
    /// `length` is `None`), splicing `replacement` into the gap. The result
    /// is reindexed; the removed elements are not separately exposed.
    #[must_use]
    pub fn splice(
        &self,
        offset: usize,
        length: Option<usize>,
        replacement: impl IntoIterator<Item = T>,
    ) -> Self {
        let mut values = self.to_vec();
        let start = offset.min(values.len());
        let end = match length {
            Some(len) => (start + len).min(values.len()),
            None => values.len(),
        };
        values.splice(start..end, replacement);
        Self::from_values(values)
    }

    /// Groups elements by the single key→value pair `f` produces for each.
    ///
    /// Buckets appear in first-seen key order; each bucket is reindexed.
    #[must_use]
    pub fn map_to_groups<U: Clone>(
        &self,
        mut f: impl FnMut(&T) -> (String, U),
    ) -> KeyedMap<OrderedList<U>> {
        let mut groups: Assoc<String, Node<OrderedList<U>>> = Assoc::new();
        for value in self.entries.values() {
            let (key, mapped) = f(value);
            let bucket = match groups.get(key.as_str()) {
                Some(Node::Leaf(bucket)) => bucket.add(mapped),
                _ => OrderedList::from_values([mapped]),
            };
            groups.insert_mut(key, Node::Leaf(bucket));
        }
        KeyedMap::from_assoc(groups)
    }

    /// Groups elements into named buckets by `f(item)`.
    #[must_use]
    pub fn group_by(&self, mut f: impl FnMut(&T) -> String) -> KeyedMap<OrderedList<T>> {
        self.map_to_groups(|value| (f(value), value.clone()))
    }

    /// Removes duplicate elements, keeping the first occurrence.
    ///
    /// Surviving elements keep their original indices.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: PartialEq,
    {
        let mut seen: Vec<T> = Vec::new();
        Self {
            entries: self.entries.filter(|_, v| {
                if seen.contains(v) {
                    false
                } else {
                    seen.push(v.clone());
                    true
                }
            }),
        }
    }

    /// Removes elements whose `f(item)` collides with an earlier one.
    ///
    /// Keeps the first occurrence; surviving elements keep their indices.
    #[must_use]
    pub fn unique_by<S: Eq + Hash>(&self, mut f: impl FnMut(&T) -> S) -> Self {
        let mut seen = HashSet::new();
        Self {
            entries: self.entries.filter(|_, v| seen.insert(f(v))),
        }
    }

    /// Removes elements sharing a [`DistinctionKey`] with an earlier one.
    #[must_use]
    pub fn unique_by_distinction(&self) -> Self
    where
        T: DistinctionKey,
    {
        self.unique_by(DistinctionKey::distinction_key)
    }

    /// Swaps elements and indices: each element's display form becomes a
    /// map key, its index the value.
    ///
    /// Later duplicates overwrite earlier ones. The result bypasses
    /// map-shape validation, like every internally built map.
    #[must_use]
    pub fn flip(&self) -> KeyedMap<usize>
    where
        T: ToString,
    {
        KeyedMap::from_assoc(
            self.entries
                .iter()
                .map(|(k, v)| (v.to_string(), Node::Leaf(*k)))
                .collect(),
        )
    }

    /// Appends another list's elements after this one's.
    ///
    /// This list's entries keep their indices; the appended elements take
    /// fresh consecutive indices after the current maximum.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        let mut key = self.next_key();
        for value in other.entries.values() {
            entries.insert_mut(key, value.clone());
            key += 1;
        }
        Self { entries }
    }

    /// Returns a new list in reverse order, indices preserved.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            entries: self.entries.reverse(),
        }
    }

    /// Returns elements present here but absent from `other`, by value.
    ///
    /// Order and original indices are preserved.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        Self {
            entries: self.entries.value_diff(&other.entries),
        }
    }

    /// Left-folds the elements with the first as implicit seed.
    ///
    /// Returns `None` on an empty list.
    pub fn reduce(&self, mut f: impl FnMut(T, &T) -> T) -> Option<T> {
        let mut values = self.entries.values();
        let first = values.next()?.clone();
        Some(values.fold(first, |acc, v| f(acc, v)))
    }

    /// Returns the index sequence as a fresh contiguous list.
    #[must_use]
    pub fn keys(&self) -> OrderedList<usize> {
        OrderedList::from_values(self.entries.keys().copied())
    }

    /// Builds a keyed map from the single pair `f(item, index)` produces
    /// for each element.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidMapShape`](arrayshape_foundation::ErrorKind::InvalidMapShape)
    /// when the combined pairs come out list-shaped.
    pub fn convert_to_hash_map<U: Clone>(
        &self,
        mut f: impl FnMut(&T, usize) -> (String, U),
    ) -> Result<KeyedMap<U>> {
        KeyedMap::create(self.entries.iter().map(|(k, v)| f(v, *k)))
    }

    /// Returns the values in order, discarding indices.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    /// Returns the keyed view of the entries, in order.
    #[must_use]
    pub fn to_entries(&self) -> Vec<(usize, T)> {
        self.entries.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Encodes the list as JSON.
    ///
    /// A list-shaped receiver encodes as a JSON array; a sparse one as a
    /// JSON object keyed by stringified indices.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Serialization`](arrayshape_foundation::ErrorKind::Serialization)
    /// when an element refuses to encode.
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Applies `f` to the whole list and returns its result.
    pub fn pipe<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        f(self)
    }

    fn next_key(&self) -> usize {
        self.entries.keys().copied().max().map_or(0, |k| k + 1)
    }
}

impl<T: Clone> OrderedList<OrderedList<T>> {
    /// Flattens one level of nested lists, reindexed from 0.
    #[must_use]
    pub fn collapse(&self) -> OrderedList<T> {
        OrderedList::from_values(self.entries.values().flat_map(OrderedList::to_vec))
    }
}

impl<T: Clone> Default for OrderedList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Clone + Eq> Eq for OrderedList<T> {}

impl<T: Clone> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Clone> From<Vec<T>> for OrderedList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T: Clone> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values().collect::<Vec<_>>().into_iter()
    }
}

impl<T: Clone + Serialize> Serialize for OrderedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if is_list_shape(self.entries.keys()) {
            serializer.collect_seq(self.entries.values())
        } else {
            serializer.collect_map(self.entries.iter().map(|(k, v)| (k.to_string(), v)))
        }
    }
}
