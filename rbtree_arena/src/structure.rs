use std::ops::{Add, AddAssign};

use log::trace;

use crate::{
    node::{Node, Side},
    NodeId, RedBlackTree,
};

impl<K: Ord + Clone> Clone for RedBlackTree<K> {
    fn clone(&self) -> Self {
        let mut tree = Self::with_capacity(self.len());
        tree.copy_from(self);
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<K: Ord + Clone> RedBlackTree<K> {
    /// Replaces this tree's contents with a deep copy of `other`, keeping
    /// its exact shape and colors.
    pub fn assign(&mut self, other: &Self) {
        self.clear();
        self.arena.reserve(other.len());
        self.copy_from(other);
        trace!("Assigned a copy of a tree of {} nodes", self.len());
    }

    /// Multiset union: a copy of `self` with every key of `other` inserted
    /// in ascending order.
    pub fn unite(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        sum.extend(other.iter().cloned());
        sum
    }

    fn copy_from(&mut self, other: &Self) {
        self.red_count = other.red_count;
        self.black_count = other.black_count;
        self.copy_subtree(NodeId::NIL, Side::Left, other, other.root);
    }

    fn copy_subtree(
        &mut self,
        parent: NodeId,
        side: Side,
        source: &Self,
        source_node: NodeId,
    ) {
        if source_node.is_nil() {
            return;
        }

        let node = self.alloc_node(Node::new(
            source.key(source_node).clone(),
            source.color(source_node),
            parent,
        ));

        match (parent.is_nil(), side) {
            (true, _) => self.root = node,
            (false, Side::Left) => self.set_left(parent, node),
            (false, Side::Right) => self.set_right(parent, node),
        }

        self.copy_subtree(node, Side::Left, source, source.left(source_node));
        self.copy_subtree(node, Side::Right, source, source.right(source_node));
    }
}

impl<'a, K: Ord + Clone> Add<&'a RedBlackTree<K>> for &'a RedBlackTree<K> {
    type Output = RedBlackTree<K>;

    fn add(self, other: &'a RedBlackTree<K>) -> RedBlackTree<K> {
        self.unite(other)
    }
}

impl<'a, K: Ord + Clone> Add<&'a RedBlackTree<K>> for RedBlackTree<K> {
    type Output = RedBlackTree<K>;

    fn add(mut self, other: &'a RedBlackTree<K>) -> RedBlackTree<K> {
        self += other;
        self
    }
}

impl<'a, K: Ord + Clone> AddAssign<&'a RedBlackTree<K>> for RedBlackTree<K> {
    fn add_assign(&mut self, other: &'a RedBlackTree<K>) {
        self.extend(other.iter().cloned());
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Structural equality: same red and black counts, and the same keys in
    /// the same shape. Node colors are not compared one by one.
    pub fn equals(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        if self.red_count != other.red_count
            || self.black_count != other.black_count
        {
            return false;
        }

        self.compare_subtrees(self.root, other, other.root)
    }

    fn compare_subtrees(
        &self,
        node: NodeId,
        other: &Self,
        other_node: NodeId,
    ) -> bool {
        match (node.is_nil(), other_node.is_nil()) {
            (true, true) => true,
            (false, false) => {
                self.key(node) == other.key(other_node)
                    && self.compare_subtrees(
                        self.left(node),
                        other,
                        other.left(other_node),
                    )
                    && self.compare_subtrees(
                        self.right(node),
                        other,
                        other.right(other_node),
                    )
            }
            _ => false,
        }
    }
}

impl<K: Ord> PartialEq for RedBlackTree<K> {
    fn eq(&self, other: &RedBlackTree<K>) -> bool {
        self.equals(other)
    }
}

impl<K: Ord> Eq for RedBlackTree<K> {}
