//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one. Duplicate values are collapsed into an occurrence count on a single
//! node.

mod multiset;
mod node;
mod tree;

pub use self::multiset::AvlMultiset;
