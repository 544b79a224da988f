use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to allocate a tree node")]
    AllocationFailed(#[from] TryReserveError),

    #[error("root node is red")]
    RedRoot,
    #[error("sentinel node is red")]
    RedSentinel,
    #[error("red node at arena index {0} has a red child")]
    DoubleRed(usize),
    #[error(
        "black height mismatch under arena index {node}: left {left}, right {right}"
    )]
    BlackHeightMismatch {
        node: usize,
        left: usize,
        right: usize,
    },
    #[error("keys out of order around arena index {0}")]
    OrderViolation(usize),
    #[error("node at arena index {0} does not point back to its parent")]
    BrokenParentLink(usize),
    #[error(
        "node counters say {red} red and {black} black, but {reachable} nodes \
         are reachable from root"
    )]
    CountMismatch {
        red: usize,
        black: usize,
        reachable: usize,
    },
}

pub type Result<T> = ::std::result::Result<T, Error>;
