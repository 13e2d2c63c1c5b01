//! Append-only storage for nodes and edges
//!
//! Handles are indices into the backing vectors. Nothing is ever removed,
//! so a handle stays valid and is never reused.

use super::types::*;

#[derive(Debug, Clone, Default)]
pub struct Arena {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Arena {
    /// Create an arena sized for a text of `text_len` characters
    ///
    /// A suffix tree over n characters has at most 2n nodes and 2n - 1 edges.
    pub fn with_capacity(text_len: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(2 * text_len + 1),
            edges: Vec::with_capacity(2 * text_len),
        }
    }

    /// Append a node with no children, no suffix link and no leaf id
    pub fn create_node(&mut self) -> NodeId {
        self.nodes.push(Node::default());
        self.nodes.len() - 1
    }

    /// Append an edge
    pub fn create_edge(&mut self, dest: NodeId, begin: TextPosition, length: EdgeLength) -> EdgeId {
        self.edges.push(Edge {
            dest,
            begin,
            length,
        });
        self.edges.len() - 1
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
