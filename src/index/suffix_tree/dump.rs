//! Human-readable tree dump for debugging

use super::tree::SuffixTree;
use super::types::*;
use std::io::{self, Write};

impl SuffixTree {
    /// Write one line per edge, indented by depth
    ///
    /// Each line reads `|-> {label, dest, leaf}` where `leaf` is `-` for
    /// internal nodes. The sentinel is rendered as `$` and children are
    /// listed in byte order so the output is deterministic.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut stack: Vec<(EdgeId, usize)> = Vec::new();
        self.push_children(&mut stack, ROOT, 0);

        while let Some((edge_id, depth)) = stack.pop() {
            let edge = self.arena.edge(edge_id);
            let leaf = self
                .arena
                .node(edge.dest)
                .leaf_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());

            writeln!(
                out,
                "{}|-> {{{}, {}, {}}}",
                "    ".repeat(depth),
                self.edge_label(edge),
                edge.dest,
                leaf
            )?;
            self.push_children(&mut stack, edge.dest, depth + 1);
        }

        Ok(())
    }

    /// Queue the edges of `node` so the smallest key is popped first
    fn push_children(&self, stack: &mut Vec<(EdgeId, usize)>, node: NodeId, depth: usize) {
        let mut children: Vec<(u8, EdgeId)> = self
            .arena
            .node(node)
            .children
            .iter()
            .map(|(&key, &edge)| (key, edge))
            .collect();
        children.sort_unstable();
        stack.extend(children.into_iter().rev().map(|(_, edge)| (edge, depth)));
    }

    /// Printable edge label with the sentinel shown as `$`
    fn edge_label(&self, edge: &Edge) -> String {
        let len = edge.length.resolve(edge.begin, self.text.len());
        self.text[edge.begin..edge.begin + len]
            .iter()
            .map(|&b| {
                if b == self.config.sentinel {
                    "$".to_string()
                } else {
                    std::ascii::escape_default(b).to_string()
                }
            })
            .collect()
    }
}
