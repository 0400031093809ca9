use std::cmp::Ordering;

use crate::node::NodeIdx;

use super::IntervalTree;

impl<R> IntervalTree<R> {
    /// Locate the node at the zero-based in-order position `rank`, returning
    /// the sentinel if `rank` is out of bounds.
    ///
    /// The descent compares the remaining rank against the size of the left
    /// subtree at each node: smaller ranks lie to the left, an equal rank is
    /// the node itself, and larger ranks skip the left subtree and the node
    /// before continuing on the right.
    pub(super) fn select(&self, mut rank: usize) -> NodeIdx {
        let mut now = self.root;

        while !now.is_nil() {
            let left = self.left(now);
            let left_size = self.size(left);

            match rank.cmp(&left_size) {
                Ordering::Less => now = left,
                Ordering::Equal => return now,
                Ordering::Greater => {
                    rank -= left_size + 1;
                    now = self.right(now);
                }
            }
        }

        NodeIdx::NIL
    }
}
