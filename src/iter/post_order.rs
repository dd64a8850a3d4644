use crate::{arena::Arena, node::NodeId};

/// A depth-first, post-order walk of a subtree (left, right, node).
#[derive(Debug)]
pub(crate) struct PostOrderIter<'a, K> {
    arena: &'a Arena<K>,

    /// Nodes pending a visit, paired with a flag recording whether their
    /// children have already been pushed.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, K> PostOrderIter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: root.map(|v| (v, false)).into_iter().collect(),
        }
    }
}

impl<K> Iterator for PostOrderIter<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, expanded) = self.stack.pop()?;
            if expanded {
                return Some(v);
            }

            // Revisit this node once both subtrees have been yielded.
            let n = self.arena.node(v);
            self.stack.push((v, true));
            self.stack.extend(
                n.right()
                    .into_iter()
                    .chain(n.left())
                    .map(|child| (child, false)),
            );
        }
    }
}
