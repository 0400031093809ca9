use crate::{
    interval::Interval,
    node::{Color, NodeIdx},
};

use super::IntervalTree;

impl<R> IntervalTree<R>
where
    R: Ord + Clone,
{
    /// Remove the interval held by `z` from the tree, returning it.
    ///
    /// The node `z` may have 0, 1 or 2 child node(s). With at most one child
    /// it is spliced out directly. Otherwise the in-order successor (the
    /// left-most node of the right subtree, which has no left child) donates
    /// its interval to `z` and is spliced out in its place:
    ///
    /// ```text
    ///            z                          s'
    ///          /   \                      /   \
    ///         1     r                    1     r
    ///              / \      ------->          / \
    ///             s   4                      x   4
    ///              \
    ///               x
    /// ```
    ///
    /// The arena slot of the spliced-out node is released afterwards, which
    /// may move another node into it.
    pub(super) fn remove_node(&mut self, z: NodeIdx) -> Interval<R> {
        let y = if self.left(z).is_nil() || self.right(z).is_nil() {
            z
        } else {
            self.tree_minimum(self.right(z))
        };

        // Invariant: "y" has at most one real child.
        debug_assert!(self.left(y).is_nil() || self.right(y).is_nil());

        let x = if !self.left(y).is_nil() {
            self.left(y)
        } else {
            self.right(y)
        };

        self.transplant(y, x);

        if y != z {
            // The successor's interval moves into "z", and the interval being
            // removed rides out with the unlinked "y".
            self.swap_intervals(y, z);
        }

        // This walk passes through "z" when it differs from "y", repairing the
        // upper bound of the moved interval as well as the shrunken path.
        self.max_fixup(self.parent(x));

        if self.color(y) == Color::Black {
            self.remove_fixup(x);
        }

        self.nil_parent = NodeIdx::NIL;

        self.release(y)
    }

    /// Restore the red-black invariants after unlinking a black node whose
    /// position is now held by `x` (possibly the sentinel).
    fn remove_fixup(&mut self, mut x: NodeIdx) {
        while x != self.root && !self.is_red(x) {
            let parent = self.parent(x);

            if x == self.left(parent) {
                let mut w = self.right(parent);

                if self.is_red(w) {
                    self.set_color(w, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    w = self.right(parent);
                }

                if !self.is_red(self.left(w)) && !self.is_red(self.right(w)) {
                    self.set_color(w, Color::Red);
                    x = parent;
                    continue;
                }

                if !self.is_red(self.right(w)) {
                    // Near child red, far child black.
                    self.set_color(self.left(w), Color::Black);
                    self.set_color(w, Color::Red);
                    self.rotate_right(w);
                    w = self.right(parent);
                }

                self.set_color(w, self.color(parent));
                self.set_color(parent, Color::Black);
                self.set_color(self.right(w), Color::Black);
                self.rotate_left(parent);
                x = self.root;
            } else {
                let mut w = self.left(parent);

                if self.is_red(w) {
                    self.set_color(w, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    w = self.left(parent);
                }

                if !self.is_red(self.left(w)) && !self.is_red(self.right(w)) {
                    self.set_color(w, Color::Red);
                    x = parent;
                    continue;
                }

                if !self.is_red(self.left(w)) {
                    self.set_color(self.right(w), Color::Black);
                    self.set_color(w, Color::Red);
                    self.rotate_left(w);
                    w = self.left(parent);
                }

                self.set_color(w, self.color(parent));
                self.set_color(parent, Color::Black);
                self.set_color(self.left(w), Color::Black);
                self.rotate_right(parent);
                x = self.root;
            }
        }

        self.set_color(x, Color::Black);
    }

    /// Swap the intervals held by two distinct nodes, leaving their links,
    /// colours and augmentation untouched.
    fn swap_intervals(&mut self, a: NodeIdx, b: NodeIdx) {
        debug_assert_ne!(a, b);

        let (lo, hi) = (a.index().min(b.index()), a.index().max(b.index()));
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].interval, &mut tail[0].interval);
    }

    /// Free the arena slot of the unlinked node `n`, returning its interval.
    ///
    /// The last node in the arena is moved into the freed slot and the links
    /// pointing at it are rewritten.
    fn release(&mut self, n: NodeIdx) -> Interval<R> {
        let last = NodeIdx::new(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(n.index());

        if n != last {
            self.relink(last, n);
        }

        node.into_interval()
    }

    /// Rewrite every link to the node that moved from `old` to `new`.
    fn relink(&mut self, old: NodeIdx, new: NodeIdx) {
        let parent = self.parent(new);

        if parent.is_nil() {
            debug_assert_eq!(self.root, old);
            self.root = new;
        } else if self.left(parent) == old {
            self.set_left(parent, new);
        } else {
            debug_assert_eq!(self.right(parent), old);
            self.set_right(parent, new);
        }

        for child in [self.left(new), self.right(new)] {
            if !child.is_nil() {
                self.set_parent(child, new);
            }
        }
    }
}
