use std::fmt::Debug;

use proptest::prelude::*;

use crate::{interval::Interval, node::NodeIdx, IntervalTree};

pub(crate) const RANGE_MAX: usize = 20;

/// Generate arbitrary well-formed (`low <= high`) intervals with bounds from
/// [0..[`RANGE_MAX`]).
///
/// The small domain encourages duplicate keys and overlapping intervals.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)))
}

/// Generate arbitrary intervals with bounds from [0..[`RANGE_MAX`]), including
/// reversed intervals where `low > high`.
pub(crate) fn any_interval() -> impl Strategy<Value = Interval<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(low, high)| Interval::new(low, high))
}

/// What a subtree actually contains, recomputed from scratch.
struct Subtree<'a, R> {
    min_key: &'a R,
    max_key: &'a R,
    max_high: &'a R,
    size: usize,
    black_height: usize,
}

/// Assert the BST, red-black and interval tree properties of `t` without
/// trusting any cached augmentation, and that the tree's own verifier agrees.
pub(crate) fn validate_tree_structure<R>(t: &IntervalTree<R>)
where
    R: Ord + Debug,
{
    assert!(t.parent(t.root).is_nil(), "root has a parent");
    assert!(!t.is_red(t.root), "root is red");

    let got = walk(t, t.root);
    assert_eq!(got.as_ref().map(|v| v.size).unwrap_or_default(), t.nodes.len());
    assert_eq!(got.as_ref().map(|v| v.max_high), t.max(t.root));

    assert!(t.verify(), "verifier rejected a well-formed tree");
}

fn walk<R>(t: &IntervalTree<R>, n: NodeIdx) -> Option<Subtree<'_, R>>
where
    R: Ord + Debug,
{
    if n.is_nil() {
        return None;
    }

    let node = t.node(n);
    let left = walk(t, node.left);
    let right = walk(t, node.right);

    // Invariant 1: parent and child links agree.
    for child in [node.left, node.right] {
        if !child.is_nil() {
            assert_eq!(t.parent(child), n, "child {child} of {n} has a stale parent");
        }
    }

    // Invariant 2: all keys in the left subtree are <= this node's key, and
    // all keys in the right subtree are >= it.
    if let Some(l) = &left {
        assert!(l.max_key <= node.key(), "left subtree of {n} out of order");
    }
    if let Some(r) = &right {
        assert!(r.min_key >= node.key(), "right subtree of {n} out of order");
    }

    // Invariant 3: a red node has no red child.
    if node.is_red() {
        assert!(!t.is_red(node.left), "red node {n} has a red left child");
        assert!(!t.is_red(node.right), "red node {n} has a red right child");
    }

    // Invariant 4: both subtrees have the same black-height.
    let left_bh = left.as_ref().map(|v| v.black_height).unwrap_or(1);
    let right_bh = right.as_ref().map(|v| v.black_height).unwrap_or(1);
    assert_eq!(left_bh, right_bh, "black-height mismatch below {n}");

    // Invariant 5: the cached max and size match the true subtree contents.
    let max_high = [left.as_ref(), right.as_ref()]
        .into_iter()
        .flatten()
        .map(|v| v.max_high)
        .fold(node.interval.high(), |acc, v| acc.max(v));
    let size = 1 + left.as_ref().map(|v| v.size).unwrap_or_default()
        + right.as_ref().map(|v| v.size).unwrap_or_default();

    assert_eq!(
        &node.max,
        max_high,
        "node {n} holding {:?} has a stale max",
        node.interval
    );
    assert_eq!(node.size, size, "node {n} has a stale size");

    Some(Subtree {
        min_key: left.as_ref().map(|v| v.min_key).unwrap_or(node.key()),
        max_key: right.as_ref().map(|v| v.max_key).unwrap_or(node.key()),
        max_high,
        size,
        black_height: left_bh + usize::from(!node.is_red()),
    })
}
