use crate::{arena::Arena, node::NodeId};

/// A depth-first, in-order walk of a subtree (left, node, right), yielding
/// nodes in ascending key order.
#[derive(Debug)]
pub(crate) struct InOrderIter<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> InOrderIter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, root: Option<NodeId>) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeId>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.arena.node(v).left();
        }
    }
}

impl<K> Iterator for InOrderIter<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(self.arena.node(v).right());

        Some(v)
    }
}
