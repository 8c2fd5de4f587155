//! Errors shared by the tree data structures in this crate.

use std::error;
use std::fmt;
use std::result;

/// An error returned by operations that require at least one element in the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyTreeError;

impl fmt::Display for EmptyTreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the tree is empty")
    }
}

impl error::Error for EmptyTreeError {}

pub type Result<T> = result::Result<T, EmptyTreeError>;
