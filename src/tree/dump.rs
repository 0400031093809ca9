use std::fmt::{self, Display};

use crate::node::NodeIdx;

use super::IntervalTree;

/// Render the tree sideways, one node per line in in-order sequence, indented
/// by depth:
///
/// ```text
///   +~[0, 5], max=5 (R)
/// +~[3, 8], max=20
///   +~[10, 20], max=20 (R)
/// ```
///
/// Red nodes are suffixed with `(R)`.
impl<R> Display for IntervalTree<R>
where
    R: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root, 0)
    }
}

impl<R> IntervalTree<R>
where
    R: Display,
{
    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, n: NodeIdx, depth: usize) -> fmt::Result {
        if n.is_nil() {
            return Ok(());
        }

        let node = self.node(n);

        self.fmt_subtree(f, node.left, depth + 1)?;

        write!(f, "{:indent$}+~{}, max={}", "", node.interval, node.max, indent = depth * 2)?;
        if node.is_red() {
            f.write_str(" (R)")?;
        }
        writeln!(f)?;

        self.fmt_subtree(f, node.right, depth + 1)
    }
}
