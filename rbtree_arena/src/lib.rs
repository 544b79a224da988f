//! A red black tree multiset whose nodes live in a single arena vector.
//!
//! Nodes refer to each other by [`NodeId`], and every tree owns its own
//! sentinel, so two trees never share nodes or a sentinel. Equal keys are
//! kept as separate nodes: inserting a key that is already present descends
//! to the right of the existing one.

use core::fmt::Debug;
use std::cmp::Ordering;

use log::trace;

mod error;
mod iter;
mod node;
mod stats;
mod structure;
mod validate;

pub use error::{Error, Result};
pub use iter::{Iter, Order, Traversal};
pub use node::{Color, NodeId};
pub use stats::Statistics;

use node::{Links, Node};

pub struct RedBlackTree<K: Ord> {
    arena: Vec<Node<K>>,
    root: NodeId,
    sentinel: Links,
    red_count: usize,
    black_count: usize,
}

impl<K> Debug for RedBlackTree<K>
where
    K: Ord + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: Ord> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: Ord> RedBlackTree<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            root: NodeId::NIL,
            sentinel: Links::sentinel(),
            red_count: 0,
            black_count: 0,
        }
    }

    /// Frees every node and resets the tree to empty. Calling it on an empty
    /// tree does nothing.
    pub fn clear(&mut self) {
        trace!("Clearing tree of {} nodes", self.len());
        self.arena.clear();
        self.root = NodeId::NIL;
        self.sentinel = Links::sentinel();
        self.red_count = 0;
        self.black_count = 0;
    }

    pub fn iter(&self) -> Iter<K> {
        Iter::new(self)
    }

    /// Keys in ascending (left, node, right) or descending (right, node,
    /// left) order.
    pub fn traverse(&self, order: Order) -> Traversal<K> {
        Traversal::new(self.iter(), order)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.red_count + self.black_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    #[inline]
    pub fn red_nodes(&self) -> usize {
        self.red_count
    }

    #[inline]
    pub fn black_nodes(&self) -> usize {
        self.black_count
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Height of the tree, counting edges. An empty tree has height -1 and a
    /// single node has height 0.
    pub fn height(&self) -> isize {
        self.subtree_height(self.root)
    }

    pub fn first(&self) -> Option<&K> {
        let node = self.minimum(self.root);
        (!node.is_nil()).then(|| self.key(node))
    }

    pub fn last(&self) -> Option<&K> {
        let node = self.maximum(self.root);
        (!node.is_nil()).then(|| self.key(node))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        !self.search(key).is_nil()
    }

    /// Always adds a new node, even when an equal key is already stored.
    pub fn insert(&mut self, key: K) {
        let parent = self.find_insert_parent(&key);
        let node = self.alloc_node(Node::new(key, Color::Red, parent));

        if parent.is_nil() {
            self.root = node;
        } else if self.key(node) < self.key(parent) {
            self.set_left(parent, node);
        } else {
            self.set_right(parent, node);
        }

        self.red_count += 1;
        self.insert_fixup(node);
    }

    /// Like [`RedBlackTree::insert`], but reports an allocation failure
    /// instead of aborting. The tree is left untouched on error.
    pub fn try_insert(&mut self, key: K) -> Result<()> {
        self.arena.try_reserve(1)?;
        self.insert(key);
        Ok(())
    }

    /// Removes one node holding `key`. Returns false if there is none.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes one node holding `key` and returns its key. With duplicate
    /// keys, the first match found descending from the root is removed.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let node = self.search(key);
        if node.is_nil() {
            return None;
        }
        Some(self.delete_node(node))
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            nodes: self.len(),
            height: self.height(),
            red_nodes: self.red_count,
            black_nodes: self.black_count,
        }
    }

    pub(crate) fn alloc_node(&mut self, node: Node<K>) -> NodeId {
        self.arena.push(node);
        NodeId::new(self.arena.len() - 1)
    }

    /// Drops `node` from the arena. The last node in the arena moves into
    /// the freed slot, so its neighbours are re-pointed at the new id.
    fn free_node(&mut self, node: NodeId) -> K {
        let last = NodeId::new(self.arena.len() - 1);
        let freed = self.arena.swap_remove(node.index());
        if node != last {
            self.relink_moved(last, node);
        }
        freed.key
    }

    fn relink_moved(&mut self, from: NodeId, to: NodeId) {
        let Links {
            parent,
            left,
            right,
            ..
        } = self.arena[to.index()].links;

        if parent.is_nil() {
            self.root = to;
        } else if self.left(parent) == from {
            self.set_left(parent, to);
        } else {
            self.set_right(parent, to);
        }

        if !left.is_nil() {
            self.set_parent(left, to);
        }
        if !right.is_nil() {
            self.set_parent(right, to);
        }
        if self.sentinel.parent == from {
            self.sentinel.parent = to;
        }
    }

    #[inline]
    fn links(&self, node: NodeId) -> &Links {
        if node.is_nil() {
            &self.sentinel
        } else {
            &self.arena[node.index()].links
        }
    }

    #[inline]
    fn links_mut(&mut self, node: NodeId) -> &mut Links {
        if node.is_nil() {
            &mut self.sentinel
        } else {
            &mut self.arena[node.index()].links
        }
    }

    #[inline]
    pub(crate) fn key(&self, node: NodeId) -> &K {
        &self.arena[node.index()].key
    }

    #[inline]
    pub(crate) fn color(&self, node: NodeId) -> Color {
        self.links(node).color
    }

    #[inline]
    pub(crate) fn parent(&self, node: NodeId) -> NodeId {
        self.links(node).parent
    }

    #[inline]
    pub(crate) fn left(&self, node: NodeId) -> NodeId {
        self.links(node).left
    }

    #[inline]
    pub(crate) fn right(&self, node: NodeId) -> NodeId {
        self.links(node).right
    }

    #[inline]
    fn set_color(&mut self, node: NodeId, color: Color) {
        self.links_mut(node).color = color;
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        self.links_mut(node).parent = parent;
    }

    #[inline]
    pub(crate) fn set_left(&mut self, node: NodeId, left: NodeId) {
        self.links_mut(node).left = left;
    }

    #[inline]
    pub(crate) fn set_right(&mut self, node: NodeId, right: NodeId) {
        self.links_mut(node).right = right;
    }

    fn search(&self, key: &K) -> NodeId {
        let mut node = self.root;
        while !node.is_nil() {
            node = match key.cmp(self.key(node)) {
                Ordering::Less => self.left(node),
                Ordering::Greater => self.right(node),
                Ordering::Equal => return node,
            };
        }
        NodeId::NIL
    }

    pub(crate) fn minimum(&self, mut node: NodeId) -> NodeId {
        if node.is_nil() {
            return node;
        }
        while !self.left(node).is_nil() {
            node = self.left(node);
        }
        node
    }

    pub(crate) fn maximum(&self, mut node: NodeId) -> NodeId {
        if node.is_nil() {
            return node;
        }
        while !self.right(node).is_nil() {
            node = self.right(node);
        }
        node
    }

    pub(crate) fn successor(&self, node: NodeId) -> NodeId {
        let right = self.right(node);
        if !right.is_nil() {
            return self.minimum(right);
        }

        let mut child = node;
        let mut parent = self.parent(node);
        while !parent.is_nil() && child == self.right(parent) {
            child = parent;
            parent = self.parent(parent);
        }
        parent
    }

    pub(crate) fn predecessor(&self, node: NodeId) -> NodeId {
        let left = self.left(node);
        if !left.is_nil() {
            return self.maximum(left);
        }

        let mut child = node;
        let mut parent = self.parent(node);
        while !parent.is_nil() && child == self.left(parent) {
            child = parent;
            parent = self.parent(parent);
        }
        parent
    }

    fn subtree_height(&self, node: NodeId) -> isize {
        if node.is_nil() {
            return -1;
        }
        let left = self.subtree_height(self.left(node));
        let right = self.subtree_height(self.right(node));
        left.max(right) + 1
    }

    fn find_insert_parent(&self, key: &K) -> NodeId {
        let mut trailing = NodeId::NIL;
        let mut node = self.root;
        while !node.is_nil() {
            trailing = node;
            node = if key < self.key(node) {
                self.left(node)
            } else {
                self.right(node)
            };
        }
        trailing
    }

    fn insert_fixup(&mut self, inserted: NodeId) {
        let mut node = inserted;
        while self.color(self.parent(node)) == Color::Red {
            let parent = self.parent(node);
            let grand_parent = self.parent(parent);

            if parent == self.left(grand_parent) {
                let uncle = self.right(grand_parent);
                if self.color(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grand_parent, Color::Red);
                    self.black_count += 1;
                    self.red_count -= 1;
                    node = grand_parent;
                } else {
                    if node == self.right(parent) {
                        node = parent;
                        self.rotate_left(node);
                    }

                    let parent = self.parent(node);
                    let grand_parent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grand_parent, Color::Red);
                    self.rotate_right(grand_parent);
                }
            } else {
                let uncle = self.left(grand_parent);
                if self.color(uncle) == Color::Red {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grand_parent, Color::Red);
                    self.black_count += 1;
                    self.red_count -= 1;
                    node = grand_parent;
                } else {
                    if node == self.left(parent) {
                        node = parent;
                        self.rotate_right(node);
                    }

                    let parent = self.parent(node);
                    let grand_parent = self.parent(parent);
                    self.set_color(parent, Color::Black);
                    self.set_color(grand_parent, Color::Red);
                    self.rotate_left(grand_parent);
                }
            }
        }

        let root = self.root;
        if self.color(root) == Color::Red {
            self.black_count += 1;
            self.red_count -= 1;
        }
        self.set_color(root, Color::Black);
    }

    /// Replaces the subtree rooted at `old` with the one rooted at `new` in
    /// `old`'s parent. `new` may be the sentinel, whose parent link is then
    /// written for the delete fixup to read.
    fn transplant(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent(old);
        if parent.is_nil() {
            self.root = new;
        } else if old == self.left(parent) {
            self.set_left(parent, new);
        } else {
            self.set_right(parent, new);
        }
        self.set_parent(new, parent);
    }

    fn delete_node(&mut self, node: NodeId) -> K {
        let node_color = self.color(node);
        let mut spliced_color = node_color;
        let replacement;

        if self.left(node).is_nil() {
            replacement = self.right(node);
            self.transplant(node, replacement);
        } else if self.right(node).is_nil() {
            replacement = self.left(node);
            self.transplant(node, replacement);
        } else {
            let successor = self.minimum(self.right(node));
            spliced_color = self.color(successor);
            replacement = self.right(successor);

            if self.parent(successor) == node {
                self.set_parent(replacement, successor);
            } else {
                self.transplant(successor, replacement);
                let right = self.right(node);
                self.set_right(successor, right);
                self.set_parent(right, successor);
            }

            self.transplant(node, successor);
            let left = self.left(node);
            self.set_left(successor, left);
            self.set_parent(left, successor);

            if spliced_color != node_color {
                match node_color {
                    Color::Black => {
                        self.black_count += 1;
                        self.red_count -= 1;
                    }
                    Color::Red => {
                        self.red_count += 1;
                        self.black_count -= 1;
                    }
                }
            }
            self.set_color(successor, node_color);
        }

        match node_color {
            Color::Black => self.black_count -= 1,
            Color::Red => self.red_count -= 1,
        }

        if spliced_color == Color::Black {
            self.delete_fixup(replacement);
        }

        self.free_node(node)
    }

    fn delete_fixup(&mut self, start: NodeId) {
        let mut node = start;
        while node != self.root && self.color(node) == Color::Black {
            let parent = self.parent(node);

            if node == self.left(parent) {
                let mut sibling = self.right(parent);

                if self.color(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right(self.parent(node));
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    self.red_count += 1;
                    self.black_count -= 1;
                    node = self.parent(node);
                } else {
                    if self.color(self.right(sibling)) == Color::Black {
                        let near = self.left(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right(self.parent(node));
                    }

                    let parent = self.parent(node);
                    let far = self.right(sibling);
                    self.set_color(sibling, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.black_count += 1;
                    self.red_count -= 1;
                    self.rotate_left(parent);
                    node = self.root;
                }
            } else {
                let mut sibling = self.left(parent);

                if self.color(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left(self.parent(node));
                }

                if self.color(self.right(sibling)) == Color::Black
                    && self.color(self.left(sibling)) == Color::Black
                {
                    self.set_color(sibling, Color::Red);
                    self.red_count += 1;
                    self.black_count -= 1;
                    node = self.parent(node);
                } else {
                    if self.color(self.left(sibling)) == Color::Black {
                        let near = self.right(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left(self.parent(node));
                    }

                    let parent = self.parent(node);
                    let far = self.left(sibling);
                    self.set_color(sibling, self.color(parent));
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.black_count += 1;
                    self.red_count -= 1;
                    self.rotate_right(parent);
                    node = self.root;
                }
            }
        }

        if self.color(node) == Color::Red {
            self.black_count += 1;
            self.red_count -= 1;
        }
        self.set_color(node, Color::Black);
    }

    /// Rotating the sentinel does nothing. Panics if `pivot` has no right
    /// child, as the rotation would cut the subtree off.
    fn rotate_left(&mut self, pivot: NodeId) {
        if pivot.is_nil() {
            return;
        }

        let right = self.right(pivot);
        if right.is_nil() {
            panic!(
                "cannot rotate left about node {}: its right child is the \
                 sentinel",
                pivot.index()
            );
        }

        let right_left = self.left(right);
        self.set_right(pivot, right_left);
        if !right_left.is_nil() {
            self.set_parent(right_left, pivot);
        }

        let parent = self.parent(pivot);
        self.set_parent(right, parent);
        if parent.is_nil() {
            self.root = right;
        } else if pivot == self.left(parent) {
            self.set_left(parent, right);
        } else {
            self.set_right(parent, right);
        }

        self.set_left(right, pivot);
        self.set_parent(pivot, right);
    }

    /// Rotating the sentinel does nothing. Panics if `pivot` has no left
    /// child, as the rotation would cut the subtree off.
    fn rotate_right(&mut self, pivot: NodeId) {
        if pivot.is_nil() {
            return;
        }

        let left = self.left(pivot);
        if left.is_nil() {
            panic!(
                "cannot rotate right about node {}: its left child is the \
                 sentinel",
                pivot.index()
            );
        }

        let left_right = self.right(left);
        self.set_left(pivot, left_right);
        if !left_right.is_nil() {
            self.set_parent(left_right, pivot);
        }

        let parent = self.parent(pivot);
        self.set_parent(left, parent);
        if parent.is_nil() {
            self.root = left;
        } else if pivot == self.left(parent) {
            self.set_left(parent, left);
        } else {
            self.set_right(parent, left);
        }

        self.set_right(left, pivot);
        self.set_parent(pivot, left);
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, NodeId, Order, RedBlackTree};

    const SCENARIO_KEYS: [i32; 10] = [15, 10, 20, 25, 30, 17, 16, 18, 5, 8];

    fn scenario_tree() -> RedBlackTree<i32> {
        SCENARIO_KEYS.into_iter().collect()
    }

    fn keys(tree: &RedBlackTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let mut tree = RedBlackTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert!(!tree.remove(&1));
        assert!(!tree.contains_key(&1));
        assert_eq!(tree.validate().unwrap(), 0);
    }

    #[test]
    fn single_node_is_black_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(42);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.red_nodes(), 0);
        assert_eq!(tree.black_nodes(), 1);
        assert_eq!(tree.color(tree.root), Color::Black);
        assert!(tree.parent(tree.root).is_nil());
    }

    #[test]
    fn insert_scenario() {
        let tree = scenario_tree();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.len(), 10);
        assert_eq!(keys(&tree), vec![5, 8, 10, 15, 16, 17, 18, 20, 25, 30]);
        assert_eq!(tree.red_nodes() + tree.black_nodes(), 10);
        tree.validate().unwrap();
    }

    #[test]
    fn insert_recolors_on_red_uncle() {
        let mut tree = RedBlackTree::new();
        tree.insert(10);
        tree.insert(5);
        tree.insert(15);
        assert_eq!((tree.red_nodes(), tree.black_nodes()), (2, 1));

        // Both children of the root are red, so this recolors them.
        tree.insert(1);
        assert_eq!((tree.red_nodes(), tree.black_nodes()), (1, 3));
        assert_eq!(*tree.key(tree.root), 10);
        tree.validate().unwrap();
    }

    #[test]
    fn insert_rotates_inner_child() {
        let mut tree = RedBlackTree::new();
        tree.insert(10);
        tree.insert(5);
        tree.insert(7);
        assert_eq!(*tree.key(tree.root), 7);
        assert_eq!(*tree.key(tree.left(tree.root)), 5);
        assert_eq!(*tree.key(tree.right(tree.root)), 10);
        assert_eq!((tree.red_nodes(), tree.black_nodes()), (2, 1));
        tree.validate().unwrap();
    }

    #[test]
    fn insert_rotates_outer_child() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        assert_eq!(*tree.key(tree.root), 2);
        assert_eq!(tree.height(), 1);
        tree.validate().unwrap();
    }

    #[test]
    fn duplicates_are_kept() {
        let mut tree = RedBlackTree::new();
        for key in [3, 1, 3, 2, 3] {
            tree.insert(key);
            tree.validate().unwrap();
        }
        assert_eq!(tree.len(), 5);
        assert_eq!(keys(&tree), vec![1, 2, 3, 3, 3]);

        assert!(tree.remove(&3));
        assert_eq!(keys(&tree), vec![1, 2, 3, 3]);
        assert_eq!(tree.take(&3), Some(3));
        assert_eq!(tree.take(&3), Some(3));
        assert_eq!(tree.take(&3), None);
        assert_eq!(keys(&tree), vec![1, 2]);
        tree.validate().unwrap();
    }

    #[test]
    fn remove_scenario() {
        let mut tree = scenario_tree();

        assert!(tree.remove(&8));
        for key in [15, 17, 5] {
            assert!(tree.remove(&key));
            tree.validate().unwrap();
        }

        let before = tree.statistics();
        assert!(!tree.remove(&35));
        assert_eq!(tree.statistics(), before);

        for key in [25, 10] {
            assert!(tree.remove(&key));
            tree.validate().unwrap();
        }

        assert!(!tree.contains_key(&13));
        assert_eq!(keys(&tree), vec![16, 18, 20, 30]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn remove_absent_key_changes_nothing() {
        let mut tree = scenario_tree();
        let copy = tree.clone();
        let height = tree.height();

        assert!(!tree.remove(&11));
        assert_eq!(tree, copy);
        assert_eq!(tree.height(), height);
        assert_eq!(keys(&tree), keys(&copy));
    }

    #[test]
    fn remove_everything() {
        let mut tree = scenario_tree();
        for key in SCENARIO_KEYS {
            assert!(tree.remove(&key));
            tree.validate().unwrap();
        }
        assert!(tree.is_empty());
        assert_eq!((tree.red_nodes(), tree.black_nodes()), (0, 0));
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn remove_root_until_empty() {
        let mut tree: RedBlackTree<i32> = (0..64).collect();
        while !tree.is_empty() {
            let root_key = *tree.key(tree.root);
            assert!(tree.remove(&root_key));
            tree.validate().unwrap();
        }
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn removal_keeps_arena_dense() {
        let mut tree: RedBlackTree<i32> = (0..32).collect();
        for key in (0..32).step_by(3) {
            tree.remove(&key);
        }
        assert_eq!(tree.arena.len(), tree.len());
        tree.validate().unwrap();
        assert!(keys(&tree).iter().all(|key| key % 3 != 0));
    }

    #[test]
    fn clear() {
        let mut tree = scenario_tree();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        tree.clear();
        assert!(tree.is_empty());

        tree.insert(1);
        assert_eq!(keys(&tree), vec![1]);
    }

    #[test]
    fn iter() {
        let tree: RedBlackTree<_> = [100, 50, 75, 150].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&50));
        assert_eq!(iter.next(), Some(&75));
        assert_eq!(iter.next(), Some(&100));
        assert_eq!(iter.next(), Some(&150));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_reverse() {
        let tree: RedBlackTree<_> = [100, 50, 75, 150].into_iter().collect();
        let mut iter = tree.iter().rev();
        assert_eq!(iter.next(), Some(&150));
        assert_eq!(iter.next(), Some(&100));
        assert_eq!(iter.next(), Some(&75));
        assert_eq!(iter.next(), Some(&50));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_from_both_ends() {
        let tree: RedBlackTree<_> = (1..=5).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn traverse_orders() {
        let tree = scenario_tree();
        let ascending: Vec<_> = tree.traverse(Order::Ascending).copied().collect();
        let mut descending: Vec<_> =
            tree.traverse(Order::Descending).copied().collect();
        assert_eq!(ascending, vec![5, 8, 10, 15, 16, 17, 18, 20, 25, 30]);
        descending.reverse();
        assert_eq!(ascending, descending);

        let empty = RedBlackTree::<i32>::new();
        assert_eq!(empty.traverse(Order::Descending).next(), None);
    }

    #[test]
    fn first_and_last() {
        let tree = scenario_tree();
        assert_eq!(tree.first(), Some(&5));
        assert_eq!(tree.last(), Some(&30));
    }

    #[test]
    fn insert_str() {
        let mut tree = RedBlackTree::new();
        tree.insert("B");
        tree.insert("A");
        tree.insert("A");
        tree.insert("C");
        assert_eq!(tree.len(), 4);
        assert!(tree.contains_key(&"C"));
        assert!(!tree.contains_key(&"nope"));
        assert_eq!(format!("{:?}", tree), r#"{"A", "A", "B", "C"}"#);
    }

    #[test]
    fn owned_keys_are_dropped_once() {
        let mut tree = RedBlackTree::new();
        for name in ["John Doe", "Tony Solomonik", "Jane Doe"] {
            tree.insert(name.to_string());
        }
        assert_eq!(
            tree.take(&"John Doe".to_string()),
            Some("John Doe".to_string())
        );
        drop(tree);
    }

    #[test]
    fn try_insert() {
        let mut tree = RedBlackTree::new();
        tree.try_insert(1).unwrap();
        tree.try_insert(2).unwrap();
        assert_eq!(keys(&tree), vec![1, 2]);
    }

    #[test]
    fn with_capacity_reserves() {
        let tree = RedBlackTree::<u64>::with_capacity(128);
        assert!(tree.capacity() >= 128);
        assert!(tree.is_empty());
    }

    #[test]
    fn rotate_sentinel_is_noop() {
        let mut tree = scenario_tree();
        let copy = tree.clone();
        tree.rotate_left(NodeId::NIL);
        tree.rotate_right(NodeId::NIL);
        assert_eq!(tree, copy);
    }

    #[test]
    fn rotations_only_move_links() {
        let mut tree: RedBlackTree<_> = [2, 1, 3].into_iter().collect();
        let root = tree.root;
        let stats = tree.statistics();

        tree.rotate_left(root);
        assert_eq!(*tree.key(tree.root), 3);
        assert_eq!(keys(&tree), vec![1, 2, 3]);
        assert_eq!(tree.red_nodes(), stats.red_nodes);

        tree.rotate_right(tree.root);
        assert_eq!(*tree.key(tree.root), 2);
        assert_eq!(tree.statistics(), stats);
        tree.validate().unwrap();
    }

    #[test]
    #[should_panic(expected = "right child is the sentinel")]
    fn rotate_left_without_right_child() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        let root = tree.root;
        tree.rotate_left(root);
    }

    #[test]
    #[should_panic(expected = "left child is the sentinel")]
    fn rotate_right_without_left_child() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        let root = tree.root;
        tree.rotate_right(root);
    }
}
