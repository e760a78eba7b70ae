//! Structural detection of list-shaped key sequences.
//!
//! A key sequence is list-shaped when it is empty or forms exactly the
//! contiguous run `0..n-1`, in order. The check is a pure function over the
//! keys; both wrapper constructors apply it with inverted polarity.

/// A key that may denote a list index.
pub trait ShapeKey {
    /// Returns the index this key denotes, if any.
    ///
    /// String keys count only in canonical decimal form: `"7"` denotes
    /// index 7, while `"07"` and `"x"` denote nothing.
    fn as_index(&self) -> Option<usize>;
}

impl ShapeKey for usize {
    fn as_index(&self) -> Option<usize> {
        Some(*self)
    }
}

impl ShapeKey for str {
    fn as_index(&self) -> Option<usize> {
        let index: usize = self.parse().ok()?;
        (index.to_string() == *self).then_some(index)
    }
}

impl ShapeKey for String {
    fn as_index(&self) -> Option<usize> {
        self.as_str().as_index()
    }
}

/// Returns true iff `keys` is empty or is exactly `0..n-1`, in order.
pub fn is_list_shape<'a, K, I>(keys: I) -> bool
where
    K: ShapeKey + ?Sized + 'a,
    I: IntoIterator<Item = &'a K>,
{
    keys.into_iter()
        .enumerate()
        .all(|(position, key)| key.as_index() == Some(position))
}
