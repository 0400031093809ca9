use log::debug;

use crate::node::NodeIdx;

use super::IntervalTree;

impl<R> IntervalTree<R>
where
    R: Ord,
{
    /// Audit the structural invariants of the whole tree, returning false and
    /// logging the first violation found.
    pub(crate) fn verify(&self) -> bool {
        if !self.parent(self.root).is_nil() {
            debug!("root {} has parent {}", self.root, self.parent(self.root));
            return false;
        }

        if self.is_red(self.root) {
            debug!("root {} is red", self.root);
            return false;
        }

        let mut prev = None;
        if self.black_height(self.root, &mut prev).is_none() {
            return false;
        }

        if self.size(self.root) != self.nodes.len() {
            debug!(
                "root subtree size {} does not match {} stored nodes",
                self.size(self.root),
                self.nodes.len()
            );
            return false;
        }

        true
    }

    /// Validate the subtree rooted at `n` in-order, returning its black-height
    /// or [`None`] if any invariant is violated within it.
    ///
    /// `prev` carries the key of the previously visited node.
    fn black_height<'a>(&'a self, n: NodeIdx, prev: &mut Option<&'a R>) -> Option<usize> {
        if n.is_nil() {
            return Some(0);
        }

        let node = self.node(n);

        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            debug!("red node {n} has a red child");
            return None;
        }

        for child in [node.left, node.right] {
            if !child.is_nil() && self.parent(child) != n {
                debug!(
                    "child {child} of {n} links to parent {}",
                    self.parent(child)
                );
                return None;
            }
        }

        let left = self.black_height(node.left, prev)?;

        if prev.is_some_and(|p| p > node.key()) {
            debug!("node {n} is ordered before its in-order predecessor");
            return None;
        }
        *prev = Some(node.key());

        let want_max = [self.max(node.left), self.max(node.right)]
            .into_iter()
            .flatten()
            .fold(node.interval.high(), |acc, v| acc.max(v));
        if *want_max != node.max {
            debug!("node {n} has a stale subtree max");
            return None;
        }

        if node.size != 1 + self.size(node.left) + self.size(node.right) {
            debug!("node {n} has a stale subtree size {}", node.size);
            return None;
        }

        let right = self.black_height(node.right, prev)?;

        if left != right {
            debug!("node {n} has black-heights {left} (left) and {right} (right)");
            return None;
        }

        Some(left + usize::from(!node.is_red()))
    }
}
