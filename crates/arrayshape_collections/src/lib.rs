//! Shape-validated collection wrappers for arrayshape.
//!
//! This crate provides the two public container types:
//! - [`OrderedList`] - An immutable, integer-indexed sequence; construction
//!   requires contiguous `0..n-1` keys
//! - [`KeyedMap`] - An immutable, string-keyed map addressable by dotted
//!   paths; construction rejects list-shaped input
//!
//! The two convert into one another and compose through caller-supplied
//! closures. Apart from the three documented in-place mutators
//! ([`OrderedList::push`], [`OrderedList::pop`], [`KeyedMap::put`]), every
//! operation returns a new instance.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod list;
pub mod map;

pub use list::{DistinctionKey, OrderedList};
pub use map::KeyedMap;
