use crate::{
    arena::Arena,
    node::{Color, NodeId, Side},
};

/// A node visited by a structural [`Walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a, K> {
    /// The key held by the visited node.
    pub key: &'a K,

    /// The color of the visited node.
    pub color: Color,

    /// The number of edges between the root and this node (the root is at
    /// depth 0).
    pub depth: usize,

    /// The side of its parent this node hangs from, or [`None`] for the root.
    pub side: Option<Side>,
}

/// A pre-order walk of the tree that exposes the tree shape alongside each
/// key/color pair.
///
/// Constructed by [`RbTree::walk()`](crate::RbTree::walk).
#[derive(Debug)]
pub struct Walk<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, K> Walk<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>) -> Self {
        Self {
            arena,
            stack: arena.root().map(|v| (v, 0)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Walk<'a, K> {
    type Item = Visit<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (v, depth) = self.stack.pop()?;
        let n = self.arena.node(v);

        self.stack.extend(
            n.right()
                .into_iter()
                .chain(n.left())
                .map(|child| (child, depth + 1)),
        );

        Some(Visit {
            key: n.key(),
            color: n.color(),
            depth,
            side: self.arena.side_of(v),
        })
    }
}
