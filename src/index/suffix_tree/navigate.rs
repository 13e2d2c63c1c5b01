//! Cursor movement and structural edits
//!
//! Shared by construction and queries. The `descend*` family assumes the
//! path it walks exists; it is only used to re-find positions the tree is
//! known to contain and never probes speculatively.

use super::tree::SuffixTree;
use super::types::*;

impl SuffixTree {
    /// Can character `c` be followed from the cursor?
    pub(super) fn has_transition(&self, cursor: &Cursor, c: u8) -> bool {
        match *cursor {
            Cursor::AtNode(node) => self.arena.node(node).children.contains_key(&c),
            Cursor::OnEdge { edge, offset, .. } => {
                let edge = self.arena.edge(edge);
                self.text[edge.begin + offset + 1] == c
            }
        }
    }

    /// Step one character forward
    ///
    /// Collapses onto the destination node as soon as the last character
    /// of an edge is reached, so `OnEdge` never sits at an edge's end.
    pub(super) fn advance_one_char(&self, cursor: &mut Cursor, c: u8) {
        assert!(self.has_transition(cursor, c), "no transition on {:#04x}", c);

        let (node, edge_id, offset) = match *cursor {
            Cursor::AtNode(node) => (node, self.arena.node(node).children[&c], 0),
            Cursor::OnEdge { node, edge, offset } => (node, edge, offset + 1),
        };

        let edge = self.arena.edge(edge_id);
        *cursor = if edge.length.is_last(offset) {
            Cursor::AtNode(edge.dest)
        } else {
            Cursor::OnEdge {
                node,
                edge: edge_id,
                offset,
            }
        };
    }

    /// Follow the edge keyed by `c` for at most `depth` characters
    ///
    /// Returns the number of characters consumed: the whole edge if it
    /// fits, otherwise exactly `depth`.
    pub(super) fn descend_one_edge(&self, cursor: &mut Cursor, c: u8, depth: usize) -> usize {
        let Cursor::AtNode(node) = *cursor else {
            panic!("descend_one_edge requires a node-standing cursor");
        };
        let edge_id = self.arena.node(node).children[&c];
        let edge = self.arena.edge(edge_id);

        if edge.length.fits_within(depth) {
            *cursor = Cursor::AtNode(edge.dest);
            edge.length.resolve(edge.begin, self.text.len())
        } else {
            *cursor = Cursor::OnEdge {
                node,
                edge: edge_id,
                offset: depth - 1,
            };
            depth
        }
    }

    /// Walk down `depth` characters spelled by `text[start..]`
    pub(super) fn descend(&self, cursor: &mut Cursor, mut start: TextPosition, mut depth: usize) {
        while depth > 0 {
            let step = self.descend_one_edge(cursor, self.text[start], depth);
            start += step;
            depth -= step;
        }
    }

    /// Hop along the suffix link of the current node; no-op at the root
    pub(super) fn follow_suffix_link(&self, cursor: &mut Cursor) {
        let Cursor::AtNode(node) = *cursor else {
            panic!("follow_suffix_link requires a node-standing cursor");
        };
        if node == ROOT {
            return;
        }
        let target = self.arena.node(node).suffix_link;
        *cursor = Cursor::AtNode(target.unwrap_or_else(|| panic!("node {} has no suffix link", node)));
    }

    /// Insert a node at the cursor's position inside an edge
    ///
    /// The original edge is shortened to end at the new node and a fresh
    /// edge carries the rest of its label to the old destination. The
    /// cursor ends up on the new node, which is also returned.
    pub(super) fn split_edge(&mut self, cursor: &mut Cursor) -> NodeId {
        let Cursor::OnEdge { edge, offset, .. } = *cursor else {
            panic!("split_edge requires a mid-edge cursor");
        };
        let consumed = offset + 1;
        let Edge {
            dest: old_dest,
            begin,
            length,
        } = *self.arena.edge(edge);

        let middle = self.arena.create_node();
        let rest_begin = begin + consumed;
        let rest = self
            .arena
            .create_edge(old_dest, rest_begin, length.remainder(consumed));
        let key = self.text[rest_begin];
        self.arena.node_mut(middle).children.insert(key, rest);

        let shortened = self.arena.edge_mut(edge);
        shortened.dest = middle;
        shortened.length = EdgeLength::Fixed(consumed);

        *cursor = Cursor::AtNode(middle);
        middle
    }

    /// Hang a new leaf off `parent` on an open edge starting at `begin`
    pub(super) fn attach_leaf(&mut self, parent: NodeId, begin: TextPosition) -> NodeId {
        let leaf = self.arena.create_node();
        self.arena.node_mut(leaf).leaf_id = Some(self.leaf_count);
        self.leaf_count += 1;

        let edge = self.arena.create_edge(leaf, begin, EdgeLength::Open);
        let key = self.text[begin];
        let previous = self.arena.node_mut(parent).children.insert(key, edge);
        debug_assert!(previous.is_none(), "node {} already branches on {:#04x}", parent, key);
        leaf
    }

    /// Set `from`'s suffix link unless it already has one
    pub(super) fn link_once(&mut self, from: Option<NodeId>, to: NodeId) {
        if let Some(from) = from {
            let node = self.arena.node_mut(from);
            if node.suffix_link.is_none() {
                node.suffix_link = Some(to);
            }
        }
    }
}
