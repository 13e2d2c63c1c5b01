pub mod stats;
pub mod suffix_tree;

pub use suffix_tree::{SuffixTree, SuffixTreeBuilder, SuffixTreeConfig};
