//! Error type for index-taking operations.

use thiserror::Error;

/// Errors raised by [`SortedSeq`](crate::SortedSeq) operations that take an index.
///
/// Failing to locate an element is never an error: lookups return `None` and
/// [`remove`](crate::SortedSeq::remove) returns `0` instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
