//! A module containing [`BinaryTreeMap`] and associated types.
//!
//! The other included types are for iteration, providing owned and borrowed iteration over
//! entries, keys or values in a map, always in ascending key order.
//!
//! As with the hash based collections, there is no mutable iterator over keys because mutating the
//! keys of a BinaryTreeMap in place would break the ordering of the tree.
//!
//! [`BinaryTreeMap`] is also re-exported under the parent module.

mod binary_tree_map;
mod iter;
mod node;

pub use binary_tree_map::*;
pub use iter::*;
pub(crate) use node::*;
