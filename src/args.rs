use clap::{Parser, ValueEnum};
use rbtree_arena::Order;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOrder {
    /// Ascending, left-node-right.
    Asc,
    /// Descending, right-node-left.
    Des,
}

impl From<DisplayOrder> for Order {
    fn from(order: DisplayOrder) -> Self {
        match order {
            DisplayOrder::Asc => Order::Ascending,
            DisplayOrder::Des => Order::Descending,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
/// A red black tree playground, by Tony Solomonik.
///
/// Without any keys to insert, runs a scripted demonstration of every tree
/// operation.
pub struct Args {
    #[clap(
        short,
        long,
        help = "Keys to insert, in order. Duplicates are kept.",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    pub insert: Vec<i64>,

    #[clap(
        short,
        long,
        help = "Keys to remove after all inserts, in order.
Removing a key that is not in the tree does nothing.",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    pub remove: Vec<i64>,

    #[clap(
        short,
        long,
        help = "Order to display the keys in.",
        value_enum,
        default_value = "asc"
    )]
    pub order: DisplayOrder,

    #[clap(long, help = "Do not print the tree statistics report.")]
    pub no_stats: bool,
}

impl Args {
    pub fn is_demo(&self) -> bool {
        self.insert.is_empty() && self.remove.is_empty()
    }
}

pub fn get_args() -> Args {
    Args::parse()
}

pub fn parse_args_from<I, T>(itr: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::parse_from(itr)
}
