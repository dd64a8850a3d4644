use log::trace;

use crate::node::{Color, Node, NodeId, Side};

/// Storage for the nodes of a single tree.
///
/// The arena exclusively owns every [`Node`]. Nodes refer to each other by
/// [`NodeId`] only, so the `parent` back-reference is purely navigational and
/// dropping the arena releases every node in one go.
///
/// Nodes are only ever appended, never removed.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<K> Arena<K> {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new, detached node.
    pub(crate) fn alloc(&mut self, key: K, color: Color) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(key, color));
        id
    }

    /// Install `id` as the root of an empty tree.
    pub(crate) fn set_root(&mut self, id: NodeId) {
        debug_assert!(self.root.is_none());
        debug_assert!(self.node(id).parent().is_none());
        self.root = Some(id);
    }

    /// Link the detached node `child` beneath `parent` on `side`, setting the
    /// parent back-reference of `child`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` already has a child on `side`.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, child: NodeId) {
        let slot = self.node_mut(parent).child_mut(side);
        assert!(
            slot.is_none(),
            "invariant violation: attaching over an existing {side:?} child"
        );
        *slot = Some(child);

        self.node_mut(child).parent = Some(parent);
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.node(id).color()
    }

    /// The color of a possibly nil node, where nil is black.
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map(|v| self.color(v)).unwrap_or(Color::Black)
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).set_color(color);
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    pub(crate) fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|p| self.parent(p))
    }

    /// The side of its parent `id` hangs from, or [`None`] for the root.
    pub(crate) fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.node(self.parent(id)?);
        if parent.left() == Some(id) {
            return Some(Side::Left);
        }

        debug_assert_eq!(parent.right(), Some(id));
        Some(Side::Right)
    }

    pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let side = self.side_of(id)?;
        self.node(self.parent(id)?).child(side.opposite())
    }

    /// The sibling of the parent of `id`.
    pub(crate) fn uncle(&self, id: NodeId) -> Option<NodeId> {
        self.sibling(self.parent(id)?)
    }

    /// Rotate the subtree rooted at `x` towards `dir`.
    ///
    /// The child of `x` on the opposite side to `dir` (the pivot `P`) takes
    /// the position of `x` beneath the former parent of `x` (or as the root),
    /// and `x` becomes the `dir` child of `P`. The inner subtree of `P` moves
    /// across to `x`. All affected parent back-references are updated.
    ///
    /// Rotating `Side::Left`:
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
    /// Rotating `Side::Right` is the mirror image. The in-order key sequence
    /// of the subtree is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no child opposite `dir` (cannot be rotated).
    pub(crate) fn rotate(&mut self, x: NodeId, dir: Side) {
        let heavy = dir.opposite();
        let pivot = self.node(x).child(heavy).unwrap_or_else(|| {
            panic!("invariant violation: rotating {dir:?} requires a {heavy:?} child")
        });

        trace!(
            "rotate {dir:?} at node {} (pivot node {})",
            x.index(),
            pivot.index()
        );

        // The inner subtree of the pivot moves across to x.
        let inner = self.node(pivot).child(dir);
        *self.node_mut(x).child_mut(heavy) = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        // The pivot takes the position of x.
        let x_parent = self.parent(x);
        match x_parent {
            Some(p) => {
                let side = self
                    .side_of(x)
                    .expect("a node with a parent is always a child of it");
                *self.node_mut(p).child_mut(side) = Some(pivot);
            }
            None => {
                debug_assert_eq!(self.root, Some(x));
                self.root = Some(pivot);
            }
        }
        self.node_mut(pivot).parent = x_parent;

        // And x hangs beneath the pivot.
        *self.node_mut(pivot).child_mut(dir) = Some(x);
        self.node_mut(x).parent = Some(pivot);
    }
}
