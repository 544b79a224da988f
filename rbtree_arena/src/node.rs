#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Index of a node inside a tree's arena.
///
/// `NodeId::NIL` is the tree's sentinel: every empty child slot and the
/// parent slot of the root refer to it. Ids are only meaningful for the tree
/// that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const NIL: NodeId = NodeId(usize::MAX);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Links {
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl Links {
    pub(crate) fn sentinel() -> Self {
        Self::new(Color::Black, NodeId::NIL)
    }

    pub(crate) fn new(color: Color, parent: NodeId) -> Self {
        Self {
            color,
            parent,
            left: NodeId::NIL,
            right: NodeId::NIL,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) links: Links,
    pub(crate) key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, color: Color, parent: NodeId) -> Self {
        Self {
            links: Links::new(color, parent),
            key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}
