#![warn(missing_docs)]
//! Crate-internal helpers, currently only for tests.

pub mod alloc;
