//! The finished suffix tree
//!
//! Owns the sentinel-terminated text and the arena. Construction lives in
//! `builder`, navigation in `navigate`, and pattern search in `query`.

use super::arena::Arena;
use super::types::*;

pub struct SuffixTree {
    /// Indexed text followed by the sentinel (case-folded if configured)
    pub(super) text: Vec<u8>,
    pub(super) arena: Arena,
    /// Leaves created so far; the next leaf gets this id
    pub(super) leaf_count: usize,
    pub(super) config: SuffixTreeConfig,
}

impl SuffixTree {
    /// Empty tree holding only the root, ready for construction
    pub(super) fn with_text(text: Vec<u8>, config: SuffixTreeConfig) -> Self {
        let mut arena = Arena::with_capacity(text.len());
        let root = arena.create_node();
        debug_assert_eq!(root, ROOT);

        Self {
            text,
            arena,
            leaf_count: 0,
            config,
        }
    }

    /// The indexed text, sentinel excluded
    pub fn text(&self) -> &[u8] {
        &self.text[..self.len()]
    }

    /// The indexed text including the trailing sentinel
    pub fn terminated_text(&self) -> &[u8] {
        &self.text
    }

    /// Length of the indexed text, sentinel excluded
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sentinel(&self) -> u8 {
        self.config.sentinel
    }

    pub fn config(&self) -> &SuffixTreeConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    /// Number of leaves; equals the terminated text length once built
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Read-only access to the node/edge storage
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Collect shape statistics
    pub fn stats(&self) -> TreeStats {
        let nodes = self.arena.nodes();
        let leaf_count = nodes.iter().filter(|n| n.is_leaf()).count();

        TreeStats {
            text_len: self.len(),
            node_count: nodes.len(),
            edge_count: self.arena.edge_count(),
            leaf_count,
            internal_count: nodes.len() - leaf_count,
            linked_count: nodes.iter().filter(|n| n.suffix_link.is_some()).count(),
            max_branching: nodes.iter().map(|n| n.children.len()).max().unwrap_or(0),
        }
    }
}
