use crate::{Color, Error, NodeId, RedBlackTree, Result};

#[derive(Default)]
struct Census {
    red: usize,
    black: usize,
}

impl<K: Ord> RedBlackTree<K> {
    /// Walks the whole tree and checks the red black properties, the key
    /// order, the parent links and the node counters. Returns the black
    /// height of the root.
    ///
    /// This is O(n) and meant for tests and debugging.
    pub fn validate(&self) -> Result<usize> {
        if self.sentinel.color != Color::Black {
            return Err(Error::RedSentinel);
        }
        if self.color(self.root) == Color::Red {
            return Err(Error::RedRoot);
        }
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(Error::BrokenParentLink(self.root.index()));
        }

        let mut census = Census::default();
        let mut previous = None;
        let black_height =
            self.validate_subtree(self.root, &mut previous, &mut census)?;

        let reachable = census.red + census.black;
        if census.red != self.red_count
            || census.black != self.black_count
            || reachable != self.arena.len()
        {
            return Err(Error::CountMismatch {
                red: self.red_count,
                black: self.black_count,
                reachable,
            });
        }

        Ok(black_height)
    }

    fn validate_subtree<'a>(
        &'a self,
        node: NodeId,
        previous: &mut Option<&'a K>,
        census: &mut Census,
    ) -> Result<usize> {
        if node.is_nil() {
            return Ok(0);
        }

        let left = self.left(node);
        let right = self.right(node);
        for child in [left, right] {
            if !child.is_nil() && self.parent(child) != node {
                return Err(Error::BrokenParentLink(child.index()));
            }
        }

        let color = self.color(node);
        if color == Color::Red
            && (self.color(left) == Color::Red
                || self.color(right) == Color::Red)
        {
            return Err(Error::DoubleRed(node.index()));
        }

        let left_height = self.validate_subtree(left, previous, census)?;

        let key = self.key(node);
        if previous.is_some_and(|previous| previous > key) {
            return Err(Error::OrderViolation(node.index()));
        }
        *previous = Some(key);

        let right_height = self.validate_subtree(right, previous, census)?;

        if left_height != right_height {
            return Err(Error::BlackHeightMismatch {
                node: node.index(),
                left: left_height,
                right: right_height,
            });
        }

        match color {
            Color::Red => {
                census.red += 1;
                Ok(left_height)
            }
            Color::Black => {
                census.black += 1;
                Ok(left_height + 1)
            }
        }
    }
}
