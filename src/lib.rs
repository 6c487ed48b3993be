//! An ordered map backed by a plain binary search tree, and the locking wrappers that make it safe
//! to share between threads.
//!
//! # Purpose
//! [`BinaryTreeMap`](collections::binary_tree::BinaryTreeMap) is deliberately simple: it never
//! rebalances, so its shape is whatever the insertion order made it, and removal works by moving
//! the in-order successor up into the removed node. In exchange the whole structure is a handful
//! of owned boxes with no parent pointers, no unsafe code and no interior mutability.
//!
//! # Method
//! The map mutates in place through the usual `&mut self` methods (`insert`, `remove`, `retain`,
//! `clear`), and also offers value semantics through `updated`, `without` and `filter`, which clone
//! the tree and leave the receiver untouched.
//!
//! Concurrency is kept entirely outside of the collection. The [`sync`] module wraps a map in a
//! single lock, either a mutex or a reader/writer lock, and forwards every call through it.
//!
//! # Error Handling
//! Missing keys aren't errors: lookups and removals return [`Option`]s (or a caller provided
//! default alongside a `bool`). The only [`Error`](std::error::Error) type in the crate is
//! [`LockContended`](sync::LockContended), returned when a non-blocking access to a wrapped map
//! would have had to wait. It is a strongly typed ZST rather than a boxed dynamic error.
//!
//! # Features
//! - `binary-tree`: [`BinaryTreeMap`](collections::binary_tree::BinaryTreeMap). (default)
//! - `sync`: the lock wrappers in [`sync`], built on `parking_lot`. (default)
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "sync")]
pub mod sync;

pub(crate) mod util;
