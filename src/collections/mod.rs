//! Various general-purpose collection types.
//!
//! # Purpose
//! The types here are plain data structures: they never lock, log or allocate behind the caller's
//! back beyond their own nodes. Sharing one between threads is left to the wrappers in
//! [`sync`](crate::sync).

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
