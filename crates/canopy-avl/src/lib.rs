//! Self-balancing AVL tree map for canopy.
//!
//! Ordered key-to-value storage with O(log n) search, insertion, and
//! deletion. The tree keeps a cached height and balance factor on every
//! node and restores the AVL invariant (balance factor in {-1, 0, 1})
//! bottom-up after every mutation, using the four classic rotation cases.
//!
//! Duplicate keys are rejected: [`AvlTree::insert`] fails with
//! [`AvlError::DuplicateKey`] and leaves the tree untouched rather than
//! updating in place.
//!
//! Nodes can carry auxiliary per-subtree data (e.g. subtree aggregates)
//! through the [`Augment`] hook, recomputed wherever height and balance
//! factor are.

pub mod error;
pub mod node;
pub mod tree;

pub use error::{AvlError, Result};
pub use node::{Augment, AvlNode};
pub use tree::AvlTree;
