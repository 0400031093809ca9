use std::cmp::Ordering;

use crate::{interval::Interval, node::NodeIdx};

use super::IntervalTree;

impl<R> IntervalTree<R>
where
    R: Ord,
{
    /// Returns the first node on the search path whose `low` endpoint equals
    /// `key`, or the sentinel.
    pub(super) fn search_key(&self, key: &R) -> NodeIdx {
        let mut now = self.root;

        while !now.is_nil() {
            now = match key.cmp(self.key(now)) {
                Ordering::Equal => return now,
                Ordering::Less => self.left(now),
                Ordering::Greater => self.right(now),
            };
        }

        NodeIdx::NIL
    }

    /// Returns a node whose interval overlaps `query`, or the sentinel.
    ///
    /// If the left subtree's maximum upper bound reaches `query.low`, then
    /// either the left subtree holds an overlapping interval or no interval in
    /// the tree overlaps (every left interval ends before `query` and every
    /// right interval starts after it), so the right subtree never needs to
    /// be searched in that case.
    pub(super) fn search_overlap(&self, query: &Interval<R>) -> NodeIdx {
        let mut now = self.root;

        while !now.is_nil() && !self.node(now).interval.overlaps(query) {
            let left = self.left(now);
            now = match self.max(left) {
                Some(max) if max >= query.low() => left,
                _ => self.right(now),
            };
        }

        now
    }
}
