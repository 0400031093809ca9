use std::fmt::{self, Display};

use crate::interval::Interval;

/// The red-black colour of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A non-owning reference to a [`Node`] in the tree arena.
///
/// [`NodeIdx::NIL`] is the sentinel: it stands in for every absent child and
/// for the parent of the root. It is never stored in the arena, so its colour,
/// augmentation and links are answered by the tree accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const NIL: Self = Self(usize::MAX);

    pub(crate) fn new(idx: usize) -> Self {
        debug_assert_ne!(idx, usize::MAX);
        Self(idx)
    }

    pub(crate) fn is_nil(self) -> bool {
        self == Self::NIL
    }

    pub(crate) fn index(self) -> usize {
        debug_assert!(!self.is_nil());
        self.0
    }
}

impl Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            return f.write_str("nil");
        }
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<R> {
    pub(crate) parent: NodeIdx,
    pub(crate) left: NodeIdx,
    pub(crate) right: NodeIdx,

    pub(crate) color: Color,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    pub(crate) max: R,

    /// The number of nodes in the subtree rooted at this [`Node`], including
    /// itself.
    pub(crate) size: usize,

    pub(crate) interval: Interval<R>,
}

impl<R> Node<R> {
    /// Construct a red leaf holding `interval`, linked to `parent`.
    pub(crate) fn new(interval: Interval<R>, parent: NodeIdx) -> Self
    where
        R: Clone,
    {
        Self {
            max: interval.high().clone(),
            interval,
            parent,
            left: NodeIdx::NIL,
            right: NodeIdx::NIL,
            color: Color::Red,
            size: 1,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn key(&self) -> &R {
        self.interval.low()
    }

    /// Consume this [`Node`], returning the [`Interval`] it holds.
    pub(crate) fn into_interval(self) -> Interval<R> {
        self.interval
    }
}
