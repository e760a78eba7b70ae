//! arrayshape - Shape-validated immutable collections
//!
//! This crate re-exports both layers of the arrayshape system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: arrayshape_collections — OrderedList, KeyedMap
//! Layer 0: arrayshape_foundation  — Assoc, Node, dot paths, shape checks, errors
//! ```

pub use arrayshape_collections as collections;
pub use arrayshape_foundation as foundation;
