use std::iter::FusedIterator;

use crate::{interval::Interval, node::NodeIdx};

use super::IntervalTree;

/// An in-order iterator over the [`Interval`]s of an [`IntervalTree`],
/// ordered by their `low` endpoint.
///
/// Created by [`IntervalTree::iter()`].
#[derive(Debug)]
pub struct Iter<'a, R> {
    tree: &'a IntervalTree<R>,
    stack: Vec<NodeIdx>,
    remaining: usize,
}

impl<'a, R> Iter<'a, R> {
    pub(super) fn new(tree: &'a IntervalTree<R>) -> Self {
        let mut this = Self {
            tree,
            stack: vec![],
            remaining: tree.nodes.len(),
        };

        // Descend down the left side of the tree.
        this.push_subtree(tree.root);

        this
    }

    fn push_subtree(&mut self, subtree_root: NodeIdx) {
        let mut ptr = subtree_root;

        while !ptr.is_nil() {
            self.stack.push(ptr);
            ptr = self.tree.left(ptr);
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a Interval<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(tree.right(v));
        self.remaining -= 1;

        Some(&tree.node(v).interval)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}

impl<R> FusedIterator for Iter<'_, R> {}
