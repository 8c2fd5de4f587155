//! Unbalanced binary search tree where duplicate values are collapsed into an occurrence count
//! on a single node.

mod multiset;
mod node;
mod tree;

pub use self::multiset::BstMultiset;
