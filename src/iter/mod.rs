mod in_order;
mod post_order;
mod pre_order;
mod walk;

pub(crate) use in_order::*;
pub(crate) use post_order::*;
pub(crate) use pre_order::*;
pub use walk::{Visit, Walk};

use crate::{arena::Arena, node::Color};

/// The order in which [`RbTree::traverse()`](crate::RbTree::traverse) visits
/// nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    #[default]
    PreOrder,

    /// Left subtree, then node, then right subtree (ascending key order).
    InOrder,

    /// Left subtree, then right subtree, then node.
    PostOrder,
}

#[derive(Debug)]
enum Inner<'a, K> {
    Pre(PreOrderIter<'a, K>),
    In(InOrderIter<'a, K>),
    Post(PostOrderIter<'a, K>),
}

/// A lazy, read-only sequence of `(key, color)` pairs in a given [`Order`].
///
/// Constructed by [`RbTree::traverse()`](crate::RbTree::traverse).
#[derive(Debug)]
pub struct Traverse<'a, K> {
    arena: &'a Arena<K>,
    inner: Inner<'a, K>,
}

impl<'a, K> Traverse<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, order: Order) -> Self {
        let root = arena.root();
        let inner = match order {
            Order::PreOrder => Inner::Pre(PreOrderIter::new(arena, root)),
            Order::InOrder => Inner::In(InOrderIter::new(arena, root)),
            Order::PostOrder => Inner::Post(PostOrderIter::new(arena, root)),
        };

        Self { arena, inner }
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let v = match &mut self.inner {
            Inner::Pre(i) => i.next(),
            Inner::In(i) => i.next(),
            Inner::Post(i) => i.next(),
        }?;

        let n = self.arena.node(v);
        Some((n.key(), n.color()))
    }
}
