//! # sfx - Suffix Tree Substring Index
//!
//! sfx builds a suffix tree over a single text once, in linear time, and
//! then answers "where does this pattern occur?" in time proportional to
//! the pattern length plus the number of matches.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix tree construction (Ukkonen's algorithm) and search
//! - [`output`] - Result formatting (plain offsets, JSON, highlighted context)
//! - [`utils`] - Input loading and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use sfx::index::SuffixTree;
//!
//! let tree = SuffixTree::build(b"abcabcabc").unwrap();
//!
//! let mut offsets = tree.find_occurrences(b"abc");
//! offsets.sort();
//! assert_eq!(offsets, vec![0, 3, 6]);
//!
//! assert!(tree.find_occurrences(b"xyz").is_empty());
//! ```
//!
//! ## Sentinel
//!
//! Every text is terminated by a sentinel byte (0x00 by default) so that
//! each suffix ends in its own leaf. Building fails if the sentinel already
//! occurs in the text; pick another one with [`index::SuffixTreeConfig`].

pub mod index;
pub mod output;
pub mod utils;
