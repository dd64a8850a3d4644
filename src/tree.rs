use std::cmp::Ordering;

use log::{debug, trace};

use crate::{
    arena::Arena,
    error::DuplicateKeyError,
    iter::{InOrderIter, Order, Traverse, Walk},
    node::{Color, NodeId, Side},
};

/// The handling of a key equal to one already in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateKeys {
    /// Fail the insert with a [`DuplicateKeyError`], leaving the tree
    /// unchanged.
    #[default]
    Reject,

    /// Store the key again, descending right past equal keys.
    ///
    /// An in-order traversal is then non-decreasing rather than strictly
    /// increasing.
    RouteRight,
}

/// A red-black tree holding an ordered set of keys.
///
/// Nodes are held in an arena owned by the tree and reference each other by
/// index, with each node holding a navigational back-reference to its parent.
/// The tree height never exceeds `2 * log2(n + 1)` for `n` keys.
///
/// The tree is not internally synchronised; callers sharing it across threads
/// must provide their own mutual exclusion.
#[derive(Debug, Clone)]
pub struct RbTree<K> {
    arena: Arena<K>,
    duplicates: DuplicateKeys,
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::with_duplicates(DuplicateKeys::default())
    }
}

impl<K> RbTree<K> {
    /// Construct an empty tree that rejects duplicate keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty tree using the given duplicate key policy.
    pub fn with_duplicates(duplicates: DuplicateKeys) -> Self {
        Self {
            arena: Arena::default(),
            duplicates,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.arena.root().is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf, or 0
    /// for an empty tree.
    pub fn height(&self) -> usize {
        self.walk().map(|v| v.depth + 1).max().unwrap_or_default()
    }

    /// The number of black nodes on every path from the root to a nil leaf,
    /// excluding the nil leaf itself.
    pub fn black_height(&self) -> usize {
        let mut ptr = self.arena.root();
        let mut height = 0;

        // Every path has the same black-height, so the left spine will do.
        while let Some(v) = ptr {
            if self.arena.color(v).is_black() {
                height += 1;
            }
            ptr = self.arena.node(v).left();
        }

        height
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.spine_end(Side::Left)
    }

    /// The largest key in the tree.
    ///
    /// When storing duplicates this is the last inserted of the equal largest
    /// keys.
    pub fn max(&self) -> Option<&K> {
        self.spine_end(Side::Right)
    }

    fn spine_end(&self, side: Side) -> Option<&K> {
        let mut v = self.arena.root()?;
        while let Some(next) = self.arena.node(v).child(side) {
            v = next;
        }
        Some(self.arena.node(v).key())
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        InOrderIter::new(&self.arena, self.arena.root()).map(move |v| self.arena.node(v).key())
    }

    /// Lazily visit every `(key, color)` pair in the given [`Order`].
    ///
    /// Each call produces a fresh sequence reflecting the current state of
    /// the tree.
    pub fn traverse(&self, order: Order) -> Traverse<'_, K> {
        Traverse::new(&self.arena, order)
    }

    /// A pre-order walk yielding the depth and parent side of each node
    /// alongside its key and color, for consumers that need the tree shape.
    pub fn walk(&self) -> Walk<'_, K> {
        Walk::new(&self.arena)
    }

    #[cfg(test)]
    pub(crate) fn arena(&self) -> &Arena<K> {
        &self.arena
    }
}

impl<K> RbTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree, rebalancing as necessary.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateKeyError`] holding `key` if an equal key is
    /// already present and the tree is configured to
    /// [`DuplicateKeys::Reject`]. The tree is not modified.
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKeyError<K>> {
        let mut cursor = match self.arena.root() {
            Some(v) => v,
            None => {
                let id = self.arena.alloc(key, Color::Black);
                self.arena.set_root(id);
                return Ok(());
            }
        };

        // Descend to the nil leaf the new key replaces.
        let side = loop {
            let n = self.arena.node(cursor);
            let side = match key.cmp(n.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => match self.duplicates {
                    DuplicateKeys::Reject => {
                        debug!("rejecting duplicate key (held by node {})", cursor.index());
                        return Err(DuplicateKeyError::new(key));
                    }
                    DuplicateKeys::RouteRight => Side::Right,
                },
            };

            match n.child(side) {
                Some(v) => cursor = v,
                None => break side,
            }
        };

        let id = self.arena.alloc(key, Color::Red);
        self.arena.attach(cursor, side, id);
        self.fixup(id);

        // Invariant: the root is always black.
        debug_assert!(self.arena.color_of(self.arena.root()).is_black());

        Ok(())
    }

    /// Returns true if an equal key is held in the tree.
    pub fn contains(&self, key: &K) -> bool {
        let mut ptr = self.arena.root();

        while let Some(v) = ptr {
            let n = self.arena.node(v);
            ptr = match key.cmp(n.key()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }

        false
    }

    /// Restore the red-black invariants after `n` was attached as a red node.
    fn fixup(&mut self, mut n: NodeId) {
        loop {
            debug_assert!(self.arena.color(n).is_red());

            let parent = match self.arena.parent(n) {
                Some(v) => v,
                None => {
                    trace!("fixup node {}: root, recolor black", n.index());
                    self.arena.set_color(n, Color::Black);
                    return;
                }
            };

            if self.arena.color(parent).is_black() {
                trace!("fixup node {}: black parent, done", n.index());
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self
                .arena
                .grandparent(n)
                .expect("invariant violation: red node at the root");
            let parent_side = self
                .arena
                .side_of(parent)
                .expect("invariant violation: parent has no side");

            let uncle = self.arena.uncle(n);
            if let Some(uncle) = uncle.filter(|&v| self.arena.color(v).is_red()) {
                trace!(
                    "fixup node {}: red uncle, recolor and move up to node {}",
                    n.index(),
                    grandparent.index()
                );

                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                n = grandparent;
                continue;
            }

            // The uncle is black (or nil).
            //
            // If n is an inner grandchild (the path grandparent -> parent -> n
            // zig-zags) rotate it up into the place of its parent, so the
            // former parent becomes an outer grandchild:
            //
            // ```text
            //          g                 g
            //         /                 /
            //        p       ->        n
            //         \               /
            //          n             p
            // ```
            let mut parent = parent;
            if self.arena.side_of(n) != Some(parent_side) {
                trace!("fixup node {}: triangle, rotate at parent", n.index());

                self.arena.rotate(parent, parent_side);
                n = parent;
                parent = self
                    .arena
                    .parent(n)
                    .expect("invariant violation: rotated node has no parent");
            }

            // n is now an outer grandchild. Rotating the grandparent away from
            // the red line lifts the parent into its place.
            trace!(
                "fixup node {}: line, rotate at node {}",
                n.index(),
                grandparent.index()
            );

            debug_assert_eq!(self.arena.parent(parent), Some(grandparent));
            self.arena.set_color(parent, Color::Black);
            self.arena.set_color(grandparent, Color::Red);
            self.arena.rotate(grandparent, parent_side.opposite());

            return;
        }
    }
}
