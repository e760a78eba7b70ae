//! Ordered association primitive and supporting machinery for arrayshape.
//!
//! This crate provides:
//! - [`Assoc`] - A persistent, insertion-ordered key→value association
//! - [`Node`] - One level of a string-keyed tree, addressed by dotted paths
//! - [`is_list_shape`] - Structural detection of contiguous integer keying
//! - [`Error`] - Shape-violation and lookup error types
//!
//! Everything here is a synchronous, in-memory value transformation. Apart
//! from the explicitly named `_mut` entry points, every operation returns a
//! new instance and leaves the receiver untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assoc;
pub mod error;
pub mod node;
pub mod shape;

pub use assoc::Assoc;
pub use error::{Error, ErrorKind};
pub use node::{Node, get_path, has_path, set_path};
pub use shape::{ShapeKey, is_list_shape};

/// Convenience alias for results carrying an arrayshape [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
