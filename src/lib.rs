//! # Sortseq
//!
//! `sortseq` provides [`SortedSeq`], a sequence kept sorted at all times by a
//! caller-supplied three-way comparator, stored in a single contiguous `Vec`.
//!
//! It deliberately trades O(n) insertion and removal for O(1) random access and
//! good cache locality. There is no tree and no rebalancing.
//!
//! ## Key Features
//!
//! - **Any Ordering**: The [`Comparator`] trait is implemented for every
//!   `Fn(&T, &T) -> Ordering`, so closures work out of the box. [`NaturalOrder`]
//!   uses `Ord`, [`Reversed`] flips any comparator.
//! - **Duplicates Welcome**: Elements comparing equal coexist. A new element is
//!   spliced next to its equal run at a deterministic end.
//! - **Identity-Aware Lookup**: [`SortedSeq::find`] and [`SortedSeq::remove`] look
//!   for *this* instance, not any equal one, through the [`Identity`] trait
//!   (implemented for `Rc`, `Arc`, references and primitive values).
//! - **Static Traversal Safety**: Iteration borrows the sequence, so it cannot be
//!   resized from inside a visitor.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use sortseq::SortedSeq;
//!
//! let mut seq = SortedSeq::natural();
//! for v in [5, 2, 8, 2] {
//!     seq.add(v);
//! }
//!
//! assert_eq!(seq.as_slice(), &[2, 2, 5, 8]);
//! assert_eq!(seq.first(), Some(&2));
//! assert_eq!(seq.last(), Some(&8));
//! ```
//!
//! ### Telling Duplicates Apart
//!
//! Wrap elements in `Rc` (or `Arc`) when equal-comparing elements must be
//! distinguished.
//!
//! ```rust
//! use sortseq::SortedSeq;
//! use std::rc::Rc;
//!
//! struct Task {
//!     priority: u32,
//!     name: &'static str,
//! }
//!
//! let mut queue = SortedSeq::new(|a: &Rc<Task>, b: &Rc<Task>| a.priority.cmp(&b.priority));
//!
//! let build = Rc::new(Task { priority: 1, name: "build" });
//! let test = Rc::new(Task { priority: 1, name: "test" });
//! queue.add(build.clone());
//! queue.add(test.clone());
//!
//! let at = queue.find(&test).unwrap();
//! assert_eq!(queue[at].name, "test");
//!
//! assert_eq!(queue.remove(&build), 1);
//! assert_eq!(queue.remove(&build), 0);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **add / remove / remove_at**: O(n), dominated by the element shift.
//! - **find**: O(log n + m) comparisons, m being the number of elements equal to the target.
//! - **get / first / last / len**: O(1).
//!
//! The container is single-threaded and performs no internal locking.

pub mod algo;
pub mod core;
pub mod error;
pub mod seq;
pub use crate::core::{Comparator, Identity, NaturalOrder, Reversed};
pub use error::{Error, Result};
pub use seq::SortedSeq;

pub mod prelude {
    pub use crate::core::{Comparator, Identity, NaturalOrder, Reversed};
    pub use crate::error::{Error, Result};
    pub use crate::seq::SortedSeq;
}
