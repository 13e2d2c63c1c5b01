//! Types for suffix tree indexing
//!
//! Nodes and edges live in flat vectors and refer to each other through
//! integer handles, so the tree has no ownership cycles and handles stay
//! valid for the lifetime of the tree.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle of a node in the arena
pub type NodeId = usize;

/// Handle of an edge in the arena
pub type EdgeId = usize;

/// Offset into the sentinel-terminated text
pub type TextPosition = usize;

/// Default sentinel appended to every indexed text
pub const SENTINEL_BYTE: u8 = 0x00;

/// The root is always the first node created
pub const ROOT: NodeId = 0;

/// Number of characters on an edge
///
/// Edges into leaves are `Open`: they run to the current end of the text
/// and grow for free as construction appends characters. The derived
/// ordering places `Open` after every `Fixed` length, so comparing against
/// any finite depth treats it as unconditionally longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeLength {
    Fixed(usize),
    Open,
}

impl EdgeLength {
    /// True if the edge holds no more than `depth` characters
    #[inline]
    pub fn fits_within(self, depth: usize) -> bool {
        self <= EdgeLength::Fixed(depth)
    }

    /// True if `offset` addresses the final character of the edge
    #[inline]
    pub fn is_last(self, offset: usize) -> bool {
        self == EdgeLength::Fixed(offset + 1)
    }

    /// Length left after the first `consumed` characters are cut off
    #[inline]
    pub fn remainder(self, consumed: usize) -> EdgeLength {
        match self {
            EdgeLength::Fixed(len) => {
                assert!(consumed < len, "edge split past its last character");
                EdgeLength::Fixed(len - consumed)
            }
            EdgeLength::Open => EdgeLength::Open,
        }
    }

    /// Concrete length given the total size of the text
    #[inline]
    pub fn resolve(self, begin: TextPosition, text_len: usize) -> usize {
        match self {
            EdgeLength::Fixed(len) => len,
            EdgeLength::Open => text_len - begin,
        }
    }
}

/// Tree vertex
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Outgoing edges keyed by their first character
    pub children: FxHashMap<u8, EdgeId>,
    /// Set once, never overwritten
    pub suffix_link: Option<NodeId>,
    /// Start offset of the suffix spelled by the path to this leaf
    pub leaf_id: Option<TextPosition>,
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf_id.is_some()
    }
}

/// Labeled edge: `text[begin..begin + length]`
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub dest: NodeId,
    pub begin: TextPosition,
    pub length: EdgeLength,
}

/// Current position in the tree (the active point)
///
/// `OnEdge` always names the node the edge leaves from, and `offset` is
/// zero-based and strictly before the edge's last character: reaching the
/// last character collapses the cursor onto the destination node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    AtNode(NodeId),
    OnEdge {
        node: NodeId,
        edge: EdgeId,
        offset: usize,
    },
}

impl Cursor {
    /// Cursor standing on the root
    pub fn root() -> Self {
        Cursor::AtNode(ROOT)
    }

    /// Node the cursor stands on, or the origin of its edge
    #[inline]
    pub fn node(&self) -> NodeId {
        match *self {
            Cursor::AtNode(node) => node,
            Cursor::OnEdge { node, .. } => node,
        }
    }
}

/// Configuration for suffix tree building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixTreeConfig {
    /// Terminator appended to the text; must not occur in it (default: 0x00)
    pub sentinel: u8,
    /// Fold ASCII case of the text and of every pattern (default: false)
    pub case_insensitive: bool,
    /// Report construction progress on stderr (default: false)
    pub progress: bool,
}

impl Default for SuffixTreeConfig {
    fn default() -> Self {
        Self {
            sentinel: SENTINEL_BYTE,
            case_insensitive: false,
            progress: false,
        }
    }
}

/// Shape statistics of a finished tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Length of the indexed text, sentinel excluded
    pub text_len: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub leaf_count: usize,
    /// Internal nodes including the root
    pub internal_count: usize,
    /// Nodes with an assigned suffix link
    pub linked_count: usize,
    /// Largest number of children of a single node
    pub max_branching: usize,
}
