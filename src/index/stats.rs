use crate::index::suffix_tree::arena::Arena;
use crate::index::suffix_tree::types::{Edge, Node};
use crate::index::suffix_tree::SuffixTree;
use std::io::{self, Write};
use std::mem::size_of;
use std::time::Duration;

/// Display tree statistics
pub fn show_stats(tree: &SuffixTree, build_time: Option<Duration>) -> io::Result<()> {
    let stdout = io::stdout();
    write_stats(&mut stdout.lock(), tree, build_time)
}

/// Write tree statistics in the human readable layout
pub fn write_stats<W: Write>(
    out: &mut W,
    tree: &SuffixTree,
    build_time: Option<Duration>,
) -> io::Result<()> {
    let stats = tree.stats();

    writeln!(out, "Suffix Tree Statistics")?;
    writeln!(out, "======================")?;
    writeln!(out)?;
    writeln!(out, "Text length:      {}", stats.text_len)?;
    writeln!(out, "Sentinel:         {:#04x}", tree.sentinel())?;
    writeln!(out, "Case-insensitive: {}", tree.config().case_insensitive)?;
    writeln!(out)?;
    writeln!(out, "Nodes:            {}", stats.node_count)?;
    writeln!(out, "  Leaves:         {}", stats.leaf_count)?;
    writeln!(out, "  Internal:       {}", stats.internal_count)?;
    writeln!(out, "  Suffix-linked:  {}", stats.linked_count)?;
    writeln!(out, "Edges:            {}", stats.edge_count)?;
    writeln!(out, "Max branching:    {}", stats.max_branching)?;

    writeln!(out)?;
    writeln!(out, "Memory (approx):  {}", format_size(approx_memory(tree.arena(), stats.text_len) as u64))?;

    if let Some(elapsed) = build_time {
        writeln!(out, "Build time:       {:.2?}", elapsed)?;
    }

    Ok(())
}

/// Estimate heap usage of the text and arena
fn approx_memory(arena: &Arena, text_len: usize) -> usize {
    let child_maps: usize = arena
        .nodes()
        .iter()
        .map(|n| n.children.capacity() * (size_of::<u8>() + size_of::<usize>() + 1))
        .sum();

    text_len + 1
        + arena.nodes().len() * size_of::<Node>()
        + arena.edges().len() * size_of::<Edge>()
        + child_maps
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
