//! Suffix tree builder
//!
//! Builds a suffix tree online with Ukkonen's algorithm:
//! 1. Validate that the sentinel does not occur inside the text
//! 2. Append characters one phase at a time, extending every suffix
//!
//! The cursor (active point) survives from one phase to the next and the
//! suffix links let each extension jump sideways instead of re-descending
//! from the root, which keeps the whole build linear in the text length.

use super::tree::SuffixTree;
use super::types::*;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use anyhow::Result;
use memchr::memchr;

/// Phases processed between two progress bar updates
const PROGRESS_STEP: usize = 1 << 16;

/// Builder for constructing suffix trees from a single text
pub struct SuffixTreeBuilder {
    config: SuffixTreeConfig,
}

impl SuffixTreeBuilder {
    /// Create a new suffix tree builder with the given configuration
    pub fn new(config: SuffixTreeConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixTreeConfig::default())
    }

    /// Build a tree over `text`, appending the configured sentinel
    ///
    /// Fails if the sentinel already occurs in the text.
    pub fn build(&self, text: &[u8]) -> Result<SuffixTree> {
        let mut data = Vec::with_capacity(text.len() + 1);
        self.append_text(&mut data, text);

        if let Some(pos) = memchr(self.config.sentinel, &data) {
            anyhow::bail!(
                "Sentinel byte {:#04x} occurs in the text at offset {}",
                self.config.sentinel,
                pos
            );
        }

        data.push(self.config.sentinel);
        Ok(self.construct(data))
    }

    /// Build a tree over a text that already ends with the sentinel
    ///
    /// The last byte must be the configured sentinel and must not occur
    /// anywhere before it.
    pub fn build_terminated(&self, text: &[u8]) -> Result<SuffixTree> {
        let sentinel = self.config.sentinel;
        let Some((&last, body)) = text.split_last() else {
            anyhow::bail!("Text is empty: expected at least the sentinel byte {:#04x}", sentinel);
        };

        if last != sentinel {
            anyhow::bail!(
                "Text must end with the sentinel byte {:#04x}, found {:#04x}",
                sentinel,
                last
            );
        }

        let mut data = Vec::with_capacity(text.len());
        self.append_text(&mut data, body);

        if let Some(pos) = memchr(sentinel, &data) {
            anyhow::bail!(
                "Sentinel byte {:#04x} is not unique: it also occurs at offset {}",
                sentinel,
                pos
            );
        }

        data.push(sentinel);
        Ok(self.construct(data))
    }

    /// Copy the text into the build buffer (case-folded if configured)
    fn append_text(&self, data: &mut Vec<u8>, text: &[u8]) {
        if self.config.case_insensitive {
            data.extend(text.iter().map(|b| b.to_ascii_lowercase()));
        } else {
            data.extend_from_slice(text);
        }
    }

    /// Run one phase per character of the terminated text
    fn construct(&self, data: Vec<u8>) -> SuffixTree {
        let n = data.len();
        let mut tree = SuffixTree::with_text(data, self.config.clone());
        let mut cursor = Cursor::root();

        let progress_bar = if self.config.progress {
            let pb = ProgressBar::new(n as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓▒░  "),
            );
            pb.set_message("Building suffix tree...");
            Some(pb)
        } else {
            None
        };

        for phase in 0..n {
            tree.extend(&mut cursor, phase);

            if let Some(ref pb) = progress_bar {
                if (phase + 1) % PROGRESS_STEP == 0 {
                    pb.inc(PROGRESS_STEP as u64);
                }
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        debug_assert_eq!(tree.leaf_count, n);
        tree
    }
}

impl SuffixTree {
    /// Build a tree over `text` with the default configuration
    ///
    /// The default sentinel (0x00) is appended and must not occur in `text`.
    pub fn build(text: &[u8]) -> Result<Self> {
        SuffixTreeBuilder::with_defaults().build(text)
    }

    /// Build a tree over a text already terminated by the default sentinel
    pub fn from_terminated(text: &[u8]) -> Result<Self> {
        SuffixTreeBuilder::with_defaults().build_terminated(text)
    }

    /// Phase `phase`: extend every suffix under construction by `text[phase]`
    ///
    /// `last_created` remembers the most recent internal node of this phase
    /// so that the next node the cursor stands on can become its suffix
    /// link target.
    fn extend(&mut self, cursor: &mut Cursor, phase: TextPosition) {
        let c = self.text[phase];
        let mut last_created: Option<NodeId> = None;

        loop {
            if self.has_transition(cursor, c) {
                // Every remaining suffix of this phase is already present
                if let Cursor::AtNode(node) = *cursor {
                    self.link_once(last_created, node);
                }
                self.advance_one_char(cursor, c);
                return;
            }

            match *cursor {
                Cursor::OnEdge {
                    node: origin,
                    edge,
                    offset,
                } => {
                    let begin = self.arena.edge(edge).begin;
                    let consumed = offset + 1;

                    let middle = self.split_edge(cursor);
                    self.link_once(last_created, middle);
                    self.attach_leaf(middle, phase);
                    last_created = Some(middle);

                    // The new node has no link yet: hop from its parent
                    // and walk back down the same label
                    *cursor = Cursor::AtNode(origin);
                    if origin == ROOT {
                        self.descend(cursor, begin + 1, consumed - 1);
                    } else {
                        self.follow_suffix_link(cursor);
                        self.descend(cursor, begin, consumed);
                    }
                }
                Cursor::AtNode(node) => {
                    self.link_once(last_created, node);
                    self.attach_leaf(node, phase);
                    if node == ROOT {
                        return;
                    }
                    self.follow_suffix_link(cursor);
                }
            }
        }
    }
}
