//! Sentinel-aware link accessors and the structural primitives (rotation,
//! transplant and augmentation repair) shared by insertion and removal.

use crate::node::{Color, Node, NodeIdx};

use super::IntervalTree;

impl<R> IntervalTree<R> {
    pub(crate) fn node(&self, n: NodeIdx) -> &Node<R> {
        &self.nodes[n.index()]
    }

    pub(crate) fn node_mut(&mut self, n: NodeIdx) -> &mut Node<R> {
        &mut self.nodes[n.index()]
    }

    /// The parent of `n`.
    ///
    /// The sentinel's parent is whatever the last [`transplant()`] of the
    /// sentinel recorded, which the removal fixup relies on.
    ///
    /// [`transplant()`]: IntervalTree::transplant
    pub(crate) fn parent(&self, n: NodeIdx) -> NodeIdx {
        if n.is_nil() {
            return self.nil_parent;
        }
        self.node(n).parent
    }

    pub(crate) fn left(&self, n: NodeIdx) -> NodeIdx {
        if n.is_nil() {
            return NodeIdx::NIL;
        }
        self.node(n).left
    }

    pub(crate) fn right(&self, n: NodeIdx) -> NodeIdx {
        if n.is_nil() {
            return NodeIdx::NIL;
        }
        self.node(n).right
    }

    pub(crate) fn color(&self, n: NodeIdx) -> Color {
        if n.is_nil() {
            return Color::Black;
        }
        self.node(n).color
    }

    pub(crate) fn is_red(&self, n: NodeIdx) -> bool {
        self.color(n) == Color::Red
    }

    /// The subtree size rooted at `n`, 0 for the sentinel.
    pub(crate) fn size(&self, n: NodeIdx) -> usize {
        if n.is_nil() {
            return 0;
        }
        self.node(n).size
    }

    /// The subtree max rooted at `n`.
    ///
    /// The sentinel has no maximum, which orders below every real value and
    /// therefore never contributes to the augmentation.
    pub(crate) fn max(&self, n: NodeIdx) -> Option<&R> {
        if n.is_nil() {
            return None;
        }
        Some(&self.node(n).max)
    }

    pub(crate) fn key(&self, n: NodeIdx) -> &R {
        self.node(n).key()
    }

    pub(super) fn set_parent(&mut self, n: NodeIdx, parent: NodeIdx) {
        if n.is_nil() {
            self.nil_parent = parent;
            return;
        }
        self.node_mut(n).parent = parent;
    }

    pub(super) fn set_left(&mut self, n: NodeIdx, child: NodeIdx) {
        self.node_mut(n).left = child;
    }

    pub(super) fn set_right(&mut self, n: NodeIdx, child: NodeIdx) {
        self.node_mut(n).right = child;
    }

    pub(super) fn set_color(&mut self, n: NodeIdx, color: Color) {
        if n.is_nil() {
            // The sentinel is always black.
            debug_assert_eq!(color, Color::Black, "attempt to paint the sentinel red");
            return;
        }
        self.node_mut(n).color = color;
    }

    /// Returns the left-most node of the subtree rooted at `n`.
    pub(super) fn tree_minimum(&self, mut n: NodeIdx) -> NodeIdx {
        while !self.left(n).is_nil() {
            n = self.left(n);
        }
        n
    }

    /// Replace the subtree rooted at `replaced` with the subtree rooted at
    /// `replacement`, from the perspective of the parent of `replaced`.
    ///
    /// `replacement` may be the sentinel, in which case the sentinel's parent
    /// is recorded. The augmentation is not repaired.
    pub(super) fn transplant(&mut self, replaced: NodeIdx, replacement: NodeIdx) {
        let parent = self.parent(replaced);

        if parent.is_nil() {
            self.root = replacement;
        } else if self.left(parent) == replaced {
            self.set_left(parent, replacement);
        } else {
            debug_assert_eq!(self.right(parent), replaced);
            self.set_right(parent, replacement);
        }

        self.set_parent(replacement, parent);
    }
}

impl<R> IntervalTree<R>
where
    R: Ord + Clone,
{
    /// Recompute the `max` and `size` of `n` from its own interval and its
    /// direct children.
    pub(super) fn update_augmentation(&mut self, n: NodeIdx) {
        let node = self.node(n);
        let (left, right) = (node.left, node.right);

        let max = [self.max(left), self.max(right)]
            .into_iter()
            .flatten()
            .fold(node.interval.high(), |acc, v| acc.max(v))
            .clone();
        let size = 1 + self.size(left) + self.size(right);

        let node = self.node_mut(n);
        node.max = max;
        node.size = size;
    }

    /// Walk from `n` up to the root, recomputing the augmentation of every
    /// node on the way.
    pub(super) fn max_fixup(&mut self, mut n: NodeIdx) {
        while !n.is_nil() {
            self.update_augmentation(n);
            n = self.parent(n);
        }
    }

    /// Left rotate the given subtree rooted at `x` around the pivot point `P`.
    ///
    /// ```text
    ///
    ///      x
    ///     / \                               P
    ///    1   P         Rotate Left        /   \
    ///       / \      --------------->    x     y
    ///      2   y                        / \   / \
    ///         / \                      1   2 3   4
    ///        3   4
    /// ```
    ///
    /// The augmentation of `x` is recomputed before that of `P`, which now
    /// depends on it.
    pub(super) fn rotate_left(&mut self, x: NodeIdx) {
        let p = self.right(x);
        debug_assert!(!p.is_nil(), "left rotation without a right child");

        let inner = self.left(p);
        self.set_right(x, inner);
        if !inner.is_nil() {
            self.set_parent(inner, x);
        }

        self.transplant(x, p);
        self.set_left(p, x);
        self.set_parent(x, p);

        self.update_augmentation(x);
        self.update_augmentation(p);
    }

    /// Right rotate the given subtree rooted at `y` around the pivot point `P`.
    ///
    /// ```text
    ///          y
    ///         / \                           P
    ///        P   4     Rotate Right       /   \
    ///       / \      --------------->    x     y
    ///      x   3                        / \   / \
    ///     / \                          1   2 3   4
    ///    1   2
    /// ```
    pub(super) fn rotate_right(&mut self, y: NodeIdx) {
        let p = self.left(y);
        debug_assert!(!p.is_nil(), "right rotation without a left child");

        let inner = self.right(p);
        self.set_left(y, inner);
        if !inner.is_nil() {
            self.set_parent(inner, y);
        }

        self.transplant(y, p);
        self.set_right(p, y);
        self.set_parent(y, p);

        self.update_augmentation(y);
        self.update_augmentation(p);
    }
}
