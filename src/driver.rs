use std::{fmt::Display, io::Write};

use log::{info, trace};
use rbtree_arena::{Order, RedBlackTree};

use crate::{args::Args, error::Result};

/// Writes the keys of `tree` to `sink`, one per line.
pub fn display_tree<K, W>(
    tree: &RedBlackTree<K>,
    order: Order,
    sink: &mut W,
) -> Result<()>
where
    K: Ord + Display,
    W: Write,
{
    for key in tree.traverse(order) {
        writeln!(sink, "{}", key)?;
    }
    Ok(())
}

pub fn write_statistics<K, W>(tree: &RedBlackTree<K>, sink: &mut W) -> Result<()>
where
    K: Ord,
    W: Write,
{
    write!(sink, "{}", tree.statistics())?;
    Ok(())
}

/// Builds a tree out of the keys given on the command line, or runs the
/// scripted demonstration when there are none.
pub fn run<W: Write>(args: &Args, sink: &mut W) -> Result<()> {
    if args.is_demo() {
        return run_demo(sink);
    }

    let mut tree = RedBlackTree::with_capacity(args.insert.len());
    for key in &args.insert {
        trace!("Inserting {}", key);
        tree.try_insert(*key)?;
    }

    for key in &args.remove {
        if tree.remove(key) {
            trace!("Removed {}", key);
        } else {
            info!("Key {} not found, nothing removed", key);
        }
    }

    display_tree(&tree, args.order.into(), sink)?;

    if !args.no_stats {
        write_statistics(&tree, sink)?;
    }

    Ok(())
}

fn write_equality<W: Write>(
    sink: &mut W,
    expression: &str,
    result: bool,
) -> Result<()> {
    writeln!(sink, "{}: {}", expression, result)?;
    Ok(())
}

/// Exercises every tree operation on small integer trees and reports the
/// results to `sink`.
pub fn run_demo<W: Write>(sink: &mut W) -> Result<()> {
    let mut t1 = RedBlackTree::new();

    if t1.is_empty() {
        writeln!(sink, "tree empty")?;
    }

    info!("Inserting into tree");
    writeln!(sink, "inserting into tree")?;
    t1.extend([15, 10, 20, 25, 30, 17, 16, 18, 5, 8]);

    info!("Copying and assigning");
    let mut t2 = RedBlackTree::new();
    t2.assign(&t1);
    let mut t3 = t2.clone();

    t1.clear();
    t1.extend([15, 17, 25, 13, 5, 10]);

    t2.assign(&t1);
    t3.assign(&t2);

    t1.insert(35);
    t1.insert(29);
    writeln!(sink, "height: {}", t1.height())?;

    if t1.is_empty() {
        writeln!(sink, "tree empty")?;
    }

    info!("Removing from tree");
    for key in [8, 15, 17, 5, 35, 25, 10] {
        let removed = t1.remove(&key);
        trace!("Remove {}: {}", key, removed);
    }

    for key in [13, 1] {
        if t1.contains_key(&key) {
            writeln!(sink, "{} in the tree", key)?;
        }
    }
    writeln!(sink, "height: {}", t1.height())?;

    t1.remove(&13);
    t1.remove(&29);
    writeln!(sink, "height: {}", t1.height())?;

    write_statistics(&t1, sink)?;

    t2.assign(&t1);
    writeln!(sink, "height: {}", t2.height())?;

    t1.insert(5);
    writeln!(sink, "height: {}", t1.height())?;
    write_statistics(&t1, sink)?;

    t1.clear();
    t2.clear();
    t3.clear();

    info!("Uniting trees");
    t1.extend([15, 24, 14, 10, 9, 5, 12]);
    t2.extend([3, 17, 10, 10]);
    t3.extend([19, 21, 4]);

    let mut t4 = &t1 + &t2 + &t3;

    display_tree(&t4, Order::Ascending, sink)?;
    writeln!(sink)?;
    display_tree(&t4, Order::Descending, sink)?;

    t1.clear();
    display_tree(&t1, Order::Ascending, sink)?;

    info!("Comparing trees");
    write_equality(sink, "t2 == t3", t2 == t3)?;
    t1.assign(&t4);
    write_equality(sink, "t1 == t4", t1 == t4)?;

    t4.clear();
    let t5 = RedBlackTree::new();
    write_equality(sink, "t4 == t5", t4 == t5)?;
    write_equality(sink, "t1 == t1", t1.equals(&t1))?;

    t2.assign(&t1);
    t2.insert(56);
    write_equality(sink, "t1 == t2", t1 == t2)?;
    write_equality(sink, "t1 != t3", t1 != t3)?;

    t1.clear();
    t2.clear();
    t1.extend([15, 10, 20, 30]);
    t2.extend([17, 21, 25, 13]);
    t1 += &t2;
    display_tree(&t1, Order::Ascending, sink)?;
    write_statistics(&t1, sink)?;

    Ok(())
}
