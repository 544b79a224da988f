use rbtree_arena::RedBlackTree;
use redblack::{
    args::{parse_args_from, Args},
    driver::run,
    error::Result,
};

pub fn install_logger() {
    let _ = pretty_env_logger::formatted_builder()
        .is_test(true)
        .parse_default_env()
        .try_init();
}

pub fn tree_from(keys: &[i64]) -> RedBlackTree<i64> {
    let tree: RedBlackTree<i64> = keys.iter().copied().collect();
    assert_valid(&tree);
    tree
}

/// Panics with the broken property if `tree` is not a valid red black tree.
pub fn assert_valid<K: Ord>(tree: &RedBlackTree<K>) {
    if let Err(e) = tree.validate() {
        panic!("invalid red black tree: {}", e);
    }
    assert_eq!(tree.len(), tree.red_nodes() + tree.black_nodes());
}

pub fn keys(tree: &RedBlackTree<i64>) -> Vec<i64> {
    tree.iter().copied().collect()
}

/// Runs the driver with `args` and returns everything it printed.
pub fn run_driver(args: &Args) -> Result<String> {
    let mut sink = Vec::new();
    run(args, &mut sink)?;
    Ok(String::from_utf8_lossy(&sink).into_owned())
}

pub fn run_driver_from<I>(argv: I) -> Result<String>
where
    I: IntoIterator<Item = &'static str>,
{
    let args = parse_args_from(std::iter::once("redblack").chain(argv));
    run_driver(&args)
}
