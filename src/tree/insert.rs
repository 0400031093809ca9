use crate::{
    interval::Interval,
    node::{Color, Node, NodeIdx},
};

use super::IntervalTree;

impl<R> IntervalTree<R>
where
    R: Ord + Clone,
{
    /// Link a new red leaf holding `interval` into the tree and restore the
    /// red-black invariants.
    ///
    /// Intervals with an equal `low` endpoint are placed to the right of the
    /// existing ones, so equal keys appear in insertion order in an in-order
    /// walk.
    pub(super) fn insert_node(&mut self, interval: Interval<R>) -> NodeIdx {
        let mut parent = NodeIdx::NIL;
        let mut now = self.root;
        while !now.is_nil() {
            parent = now;
            now = if interval.low() < self.key(now) {
                self.left(now)
            } else {
                self.right(now)
            };
        }

        let go_left = !parent.is_nil() && interval.low() < self.key(parent);

        let z = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::new(interval, parent));

        if parent.is_nil() {
            self.root = z;
        } else if go_left {
            self.set_left(parent, z);
        } else {
            self.set_right(parent, z);
        }

        // Every ancestor of the new leaf gains one node and possibly a larger
        // upper bound.
        self.max_fixup(z);
        self.insert_fixup(z);

        z
    }

    /// Restore the red-black invariants after linking the red node `z`.
    ///
    /// Rotations repair the augmentation of the nodes they move, so no further
    /// augmentation pass is required.
    fn insert_fixup(&mut self, mut z: NodeIdx) {
        while self.is_red(self.parent(z)) {
            // The parent is red, so it is not the root and the grandparent is
            // a real node.
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            debug_assert!(!grandparent.is_nil());

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);

                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                    continue;
                }

                if z == self.right(parent) {
                    // Inner child: convert to the outer case.
                    z = parent;
                    self.rotate_left(z);
                }

                let parent = self.parent(z);
                let grandparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
            } else {
                let uncle = self.left(grandparent);

                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                    continue;
                }

                if z == self.left(parent) {
                    z = parent;
                    self.rotate_right(z);
                }

                let parent = self.parent(z);
                let grandparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
