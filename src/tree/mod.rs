mod dump;
mod insert;
mod iter;
mod links;
mod rank;
mod remove;
mod search;
mod verify;

pub use iter::Iter;

use log::trace;

use crate::{
    error::{Error, Result},
    interval::Interval,
    node::{Node, NodeIdx},
};

/// A red-black interval tree with order-statistic access.
///
/// Intervals are ordered by their `low` endpoint; intervals with equal `low`
/// endpoints are permitted and retain their insertion order. Every node caches
/// the largest `high` endpoint and the number of nodes in its subtree, which
/// drive the overlap search and rank lookups respectively.
///
/// Nodes live in an arena and refer to each other by index. The shared
/// sentinel (an index that is never stored) stands in for every absent child
/// and the parent of the root.
#[derive(Debug, Clone)]
pub struct IntervalTree<R> {
    pub(crate) nodes: Vec<Node<R>>,
    pub(crate) root: NodeIdx,

    /// The parent link of the sentinel, set while a removal is in progress
    /// and [`NodeIdx::NIL`] otherwise.
    pub(crate) nil_parent: NodeIdx,
}

impl<R> Default for IntervalTree<R> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<R> IntervalTree<R> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty tree with space for at least `capacity` intervals.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeIdx::NIL,
            nil_parent: NodeIdx::NIL,
        }
    }

    /// Returns the number of intervals in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all intervals, resetting the tree to its empty state.
    pub fn clear(&mut self) {
        trace!("clearing interval tree of {} nodes", self.nodes.len());

        self.nodes.clear();
        self.root = NodeIdx::NIL;
        self.nil_parent = NodeIdx::NIL;
    }

    /// Returns the largest `high` endpoint of all intervals in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_rbtree::{Interval, IntervalTree};
    ///
    /// let mut t = IntervalTree::new();
    /// assert_eq!(t.max_high(), None);
    ///
    /// t.insert(Interval::new(0, 5));
    /// t.insert(Interval::new(10, 20));
    /// t.insert(Interval::new(3, 8));
    /// assert_eq!(t.max_high(), Some(&20));
    /// ```
    pub fn max_high(&self) -> Option<&R> {
        self.max(self.root)
    }

    /// Returns an iterator over all intervals, ordered by their `low`
    /// endpoint.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self)
    }

    /// Returns the interval at the zero-based in-order position `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `rank >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_rbtree::{Error, Interval, IntervalTree};
    ///
    /// let mut t = IntervalTree::new();
    /// t.insert(Interval::new(0, 5));
    /// t.insert(Interval::new(10, 20));
    /// t.insert(Interval::new(3, 8));
    ///
    /// assert_eq!(t.find_by_rank(1), Ok(&Interval::new(3, 8)));
    /// assert_eq!(t.find_by_rank(3), Err(Error::NotFound { rank: 3, len: 3 }));
    /// ```
    pub fn find_by_rank(&self, rank: usize) -> Result<&Interval<R>> {
        let n = self.select(rank);
        if n.is_nil() {
            return Err(Error::NotFound {
                rank,
                len: self.len(),
            });
        }

        Ok(&self.node(n).interval)
    }
}

impl<R> IntervalTree<R>
where
    R: Ord,
{
    /// Returns an interval whose `low` endpoint equals `key`, if any.
    pub fn get(&self, key: &R) -> Option<&Interval<R>> {
        let n = self.search_key(key);
        if n.is_nil() {
            return None;
        }
        Some(&self.node(n).interval)
    }

    /// Returns true if an interval with a `low` endpoint equal to `key` is
    /// stored in the tree.
    pub fn contains_key(&self, key: &R) -> bool {
        !self.search_key(key).is_nil()
    }

    /// Returns an interval in the tree that overlaps `query`, if any.
    ///
    /// The search follows a single root-to-leaf path guided by the cached
    /// subtree maximums, so it completes in O(log n).
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_rbtree::{Interval, IntervalTree};
    ///
    /// let mut t = IntervalTree::new();
    /// t.insert(Interval::new(1, 3));
    /// t.insert(Interval::new(6, 7));
    ///
    /// assert_eq!(t.find_overlap(&Interval::new(2, 5)), Some(&Interval::new(1, 3)));
    /// assert_eq!(t.find_overlap(&Interval::new(4, 5)), None);
    /// ```
    pub fn find_overlap(&self, query: &Interval<R>) -> Option<&Interval<R>> {
        let n = self.search_overlap(query);
        if n.is_nil() {
            return None;
        }
        Some(&self.node(n).interval)
    }

    /// Returns true if any interval in the tree overlaps `query`.
    pub fn overlaps(&self, query: &Interval<R>) -> bool {
        !self.search_overlap(query).is_nil()
    }

    /// Audit the red-black, ordering and augmentation invariants of the tree.
    ///
    /// This is a diagnostic O(n) walk with no side effects; it returns false
    /// and logs the first violation found at the debug level if the tree is
    /// malformed.
    pub fn check(&self) -> bool {
        self.verify()
    }
}

impl<R> IntervalTree<R>
where
    R: Ord + Clone,
{
    /// Insert `interval` into the tree.
    ///
    /// Intervals with an existing `low` endpoint are permitted, and are placed
    /// after the existing ones in the in-order sequence.
    pub fn insert(&mut self, interval: Interval<R>) {
        trace!("inserting interval into tree of {} nodes", self.nodes.len());

        self.insert_node(interval);
    }

    /// Remove an interval whose `low` endpoint equals `key`, returning it.
    ///
    /// If several intervals share the key, the first found on the search path
    /// is removed. Returns [`None`] and leaves the tree untouched if no
    /// interval has the key.
    pub fn delete(&mut self, key: &R) -> Option<Interval<R>> {
        let n = self.search_key(key);
        if n.is_nil() {
            trace!("delete found no matching key");
            return None;
        }

        trace!("deleting node {n} from tree of {} nodes", self.nodes.len());
        Some(self.remove_node(n))
    }

    /// Remove the interval at the zero-based in-order position `rank`,
    /// returning it.
    ///
    /// This removes the same interval [`IntervalTree::find_by_rank()`] returns
    /// for `rank`. Returns [`None`] and leaves the tree untouched if
    /// `rank >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_rbtree::{Interval, IntervalTree};
    ///
    /// let mut t = IntervalTree::from_iter([
    ///     Interval::new(0, 5),
    ///     Interval::new(10, 20),
    ///     Interval::new(3, 8),
    /// ]);
    ///
    /// assert_eq!(t.delete_by_index(2), Some(Interval::new(10, 20)));
    /// assert_eq!(t.delete_by_index(2), None);
    /// assert_eq!(t.max_high(), Some(&8));
    /// ```
    pub fn delete_by_index(&mut self, rank: usize) -> Option<Interval<R>> {
        let n = self.select(rank);
        if n.is_nil() {
            trace!("delete_by_index rank {rank} out of bounds");
            return None;
        }

        trace!("deleting rank {rank} from tree of {} nodes", self.nodes.len());
        Some(self.remove_node(n))
    }
}

impl<R> FromIterator<Interval<R>> for IntervalTree<R>
where
    R: Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = Interval<R>>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<R> Extend<Interval<R>> for IntervalTree<R>
where
    R: Ord + Clone,
{
    fn extend<T: IntoIterator<Item = Interval<R>>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<'a, R> IntoIterator for &'a IntervalTree<R> {
    type Item = &'a Interval<R>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
