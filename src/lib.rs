//! An augmented red-black interval tree with order-statistic access.
//!
//! [`IntervalTree`] stores closed [`Interval`]s ordered by their `low`
//! endpoint. Each node caches the largest `high` endpoint in its subtree,
//! allowing an overlapping interval to be found in O(log n), and the number of
//! nodes in its subtree, allowing the k-th interval in sorted order to be read
//! or removed in O(log n).
//!
//! Insertion and removal restore the red-black invariants with the classical
//! recolouring and rotation cases, keeping the tree height within
//! `2 * log2(n + 1)`. [`IntervalTree::check()`] audits every structural
//! invariant and is intended for tests and diagnostics.
//!
//! # Example
//!
//! ```rust
//! use interval_rbtree::{Interval, IntervalTree};
//!
//! let mut t = IntervalTree::new();
//! t.insert(Interval::new(0, 5));
//! t.insert(Interval::new(10, 20));
//! t.insert(Interval::new(3, 8));
//!
//! assert!(t.check());
//! assert_eq!(t.find_by_rank(1), Ok(&Interval::new(3, 8)));
//! assert_eq!(t.max_high(), Some(&20));
//! assert!(t.overlaps(&Interval::new(6, 9)));
//!
//! assert_eq!(t.delete_by_index(0), Some(Interval::new(0, 5)));
//! assert_eq!(t.len(), 2);
//! ```
//!
//! # Logging
//!
//! Mutations are logged at the trace level, and [`IntervalTree::check()`]
//! logs the first invariant violation it finds at the debug level, through
//! the [`log`] facade.

mod error;
mod interval;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use interval::Interval;
pub use tree::{IntervalTree, Iter};
