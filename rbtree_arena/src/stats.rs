use std::fmt::{Display, Formatter};

const LABEL_WIDTH: usize = 25;

/// A snapshot of a tree's size and shape, rendered by [`Display`] as a short
/// text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub nodes: usize,
    pub height: isize,
    pub red_nodes: usize,
    pub black_nodes: usize,
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Red-Black Tree Statistics")?;
        writeln!(f, "-------------------------")?;
        writeln!(f, "{:>LABEL_WIDTH$}{}", "Total Nodes: ", self.nodes)?;
        writeln!(f, "{:>LABEL_WIDTH$}{}", "Tree Height: ", self.height)?;
        writeln!(
            f,
            "{:>LABEL_WIDTH$}{}",
            "Number of Red Nodes: ", self.red_nodes
        )?;
        writeln!(
            f,
            "{:>LABEL_WIDTH$}{}",
            "Number of Black Nodes: ", self.black_nodes
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;

    #[test]
    fn report_layout() {
        let tree: RedBlackTree<_> = [2, 1, 3].into_iter().collect();
        let expected = "Red-Black Tree Statistics\n\
                        -------------------------\n\
                        \x20           Total Nodes: 3\n\
                        \x20           Tree Height: 1\n\
                        \x20   Number of Red Nodes: 2\n\
                        \x20 Number of Black Nodes: 1\n";
        assert_eq!(tree.statistics().to_string(), expected);
    }

    #[test]
    fn empty_report() {
        let stats = RedBlackTree::<u8>::new().statistics();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.height, -1);
        assert!(stats.to_string().contains("Tree Height: -1"));
    }
}
