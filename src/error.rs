use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    StdIOError(#[from] std::io::Error),
    #[error(transparent)]
    RedBlackTreeError(#[from] rbtree_arena::Error),
}

pub type Result<T> = ::std::result::Result<T, Error>;
