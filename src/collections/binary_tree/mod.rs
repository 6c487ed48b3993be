//! Collection types built on binary search trees. Currently just [`BinaryTreeMap`], which doesn't
//! balance itself.

pub mod map;

#[doc(inline)]
pub use map::BinaryTreeMap;
