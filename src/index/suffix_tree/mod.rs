//! Suffix tree indexing module
//!
//! This module provides O(m + k) exact substring search over a single text
//! using a suffix tree built online in linear time (Ukkonen's algorithm).
//!
//! ## Architecture
//!
//! - `types`: Core type definitions (handles, edge lengths, cursor, config)
//! - `arena`: Append-only node and edge storage
//! - `tree`: The finished tree and its accessors
//! - `navigate`: Cursor movement and structural edits
//! - `builder`: Validation and the phase-by-phase construction
//! - `query`: Occurrence search
//! - `dump`: Debug printing
//!
//! ## Example
//!
//! ```
//! use sfx::index::suffix_tree::SuffixTree;
//!
//! let tree = SuffixTree::build(b"banana").unwrap();
//! assert_eq!(tree.find_occurrences_sorted(b"ana"), vec![1, 3]);
//! ```

pub mod arena;
pub mod builder;
mod dump;
mod navigate;
mod query;
pub mod tree;
pub mod types;

// Re-exports for convenience
pub use arena::Arena;
pub use builder::SuffixTreeBuilder;
pub use tree::SuffixTree;
pub use types::{Cursor, EdgeLength, SuffixTreeConfig, TreeStats, SENTINEL_BYTE};
