use std::iter::FusedIterator;

use crate::{NodeId, RedBlackTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

pub struct Iter<'a, K: Ord + 'a> {
    tree: &'a RedBlackTree<K>,
    head: NodeId,
    tail: NodeId,
    length: usize,
}

impl<'a, K: Ord + 'a> Iter<'a, K> {
    pub(crate) fn new(tree: &'a RedBlackTree<K>) -> Self {
        Self {
            tree,
            head: tree.minimum(tree.root),
            tail: tree.maximum(tree.root),
            length: tree.len(),
        }
    }
}

impl<'a, K: Ord + 'a> Clone for Iter<'a, K> {
    fn clone(&self) -> Iter<'a, K> {
        Iter {
            tree: self.tree,
            head: self.head,
            tail: self.tail,
            length: self.length,
        }
    }
}

impl<'a, K: Ord + 'a> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.length == 0 || self.head.is_nil() {
            return None;
        }

        let key = self.tree.key(self.head);
        self.head = self.tree.successor(self.head);
        self.length -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.length, Some(self.length))
    }
}

impl<'a, K: Ord + 'a> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.length == 0 || self.tail.is_nil() {
            return None;
        }

        let key = self.tree.key(self.tail);
        self.tail = self.tree.predecessor(self.tail);
        self.length -= 1;
        Some(key)
    }
}

impl<'a, K: Ord + 'a> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K: Ord + 'a> FusedIterator for Iter<'a, K> {}

/// A single pass over the keys in the requested [`Order`].
pub struct Traversal<'a, K: Ord + 'a> {
    iter: Iter<'a, K>,
    order: Order,
}

impl<'a, K: Ord + 'a> Traversal<'a, K> {
    pub(crate) fn new(iter: Iter<'a, K>, order: Order) -> Self {
        Self { iter, order }
    }

    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a, K: Ord + 'a> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        match self.order {
            Order::Ascending => self.iter.next(),
            Order::Descending => self.iter.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K: Ord + 'a> ExactSizeIterator for Traversal<'a, K> {}

impl<'a, K: Ord + 'a> FusedIterator for Traversal<'a, K> {}
