use crate::{arena::Arena, node::NodeId};

/// A depth-first, pre-order walk of a subtree (node, left, right).
#[derive(Debug)]
pub(crate) struct PreOrderIter<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> PreOrderIter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: root.into_iter().collect(),
        }
    }
}

impl<K> Iterator for PreOrderIter<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;
        let n = self.arena.node(v);

        // Push the right child first so the left subtree is visited before it.
        self.stack.extend(n.right().into_iter().chain(n.left()));

        Some(v)
    }
}
