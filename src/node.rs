/// The color bit of a [`Node`].
///
/// A nil leaf (an absent child) is always considered [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`].
    ///
    /// [`Red`]: Color::Red
    pub fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if the color is [`Black`].
    ///
    /// [`Black`]: Color::Black
    pub fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

/// The side of a parent a child node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The mirror of this side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A stable index of a [`Node`] within an [`Arena`](crate::arena::Arena).
///
/// Nodes are never removed from the arena, so an issued [`NodeId`] remains
/// valid for the lifetime of the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    key: K,
    color: Color,

    /// Non-owning back-reference to the structural parent.
    ///
    /// [`None`] for the root only.
    pub(crate) parent: Option<NodeId>,

    /// Child node pointers. [`None`] is a (black) nil leaf.
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Construct a detached node with nil children.
    pub(crate) fn new(key: K, color: Color) -> Self {
        Self {
            key,
            color,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub(crate) fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
