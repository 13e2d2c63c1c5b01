//! Pattern search over a finished suffix tree
//!
//! A pattern occurs at offset `i` iff it is a prefix of the suffix starting
//! at `i`, so the occurrences are exactly the leaves below the position the
//! pattern spells from the root. Matching costs O(m) and enumerating the
//! subtree O(k) for k occurrences.

use super::tree::SuffixTree;
use super::types::*;
use rayon::prelude::*;
use std::borrow::Cow;

impl SuffixTree {
    /// All zero-based offsets where `pattern` occurs, in no particular order
    ///
    /// An empty pattern matches every offset of the text. A pattern that
    /// contains the sentinel never matches.
    pub fn find_occurrences(&self, pattern: &[u8]) -> Vec<usize> {
        let mut offsets = Vec::new();
        if let Some(node) = self.locate(pattern) {
            self.collect_leaves(node, |leaf_id| offsets.push(leaf_id));
        }
        offsets
    }

    /// Occurrences in ascending order
    pub fn find_occurrences_sorted(&self, pattern: &[u8]) -> Vec<usize> {
        let mut offsets = self.find_occurrences(pattern);
        offsets.sort_unstable();
        offsets
    }

    /// Number of occurrences, without materializing the offsets
    pub fn count_occurrences(&self, pattern: &[u8]) -> usize {
        let mut count = 0;
        if let Some(node) = self.locate(pattern) {
            self.collect_leaves(node, |_| count += 1);
        }
        count
    }

    /// True if `pattern` occurs at least once
    pub fn contains(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return !self.is_empty();
        }
        self.locate(pattern).is_some()
    }

    /// Sorted occurrences of many patterns, searched in parallel
    pub fn find_many<P>(&self, patterns: &[P]) -> Vec<Vec<usize>>
    where
        P: AsRef<[u8]> + Sync,
    {
        patterns
            .par_iter()
            .map(|pattern| self.find_occurrences_sorted(pattern.as_ref()))
            .collect()
    }

    /// Node whose subtree holds every occurrence of `pattern`
    fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let pattern = self.normalize(pattern);
        if memchr::memchr(self.config.sentinel, &pattern).is_some() {
            return None;
        }

        let mut cursor = Cursor::root();
        for &c in pattern.iter() {
            if !self.has_transition(&cursor, c) {
                return None;
            }
            self.advance_one_char(&mut cursor, c);
        }

        // A point inside an edge has the same leaves as the edge's end
        Some(match cursor {
            Cursor::AtNode(node) => node,
            Cursor::OnEdge { edge, .. } => self.arena.edge(edge).dest,
        })
    }

    /// Apply the case folding the text was built with
    fn normalize<'a>(&self, pattern: &'a [u8]) -> Cow<'a, [u8]> {
        if self.config.case_insensitive {
            Cow::Owned(pattern.to_ascii_lowercase())
        } else {
            Cow::Borrowed(pattern)
        }
    }

    /// Visit the leaf id of every leaf below `start`
    ///
    /// The sentinel-only suffix is skipped: it starts past the end of the
    /// original text.
    fn collect_leaves(&self, start: NodeId, mut visit: impl FnMut(usize)) {
        let end = self.len();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            let node = self.arena.node(node);
            if let Some(leaf_id) = node.leaf_id {
                if leaf_id < end {
                    visit(leaf_id);
                }
                continue;
            }
            stack.extend(node.children.values().map(|&edge| self.arena.edge(edge).dest));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_tree::SuffixTreeBuilder;

    fn naive(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        if pattern.len() > text.len() {
            return Vec::new();
        }
        (0..=text.len() - pattern.len())
            .filter(|&i| &text[i..i + pattern.len()] == pattern)
            .collect()
    }

    /// Deterministic xorshift stream for reproducible texts
    fn pseudo_random(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
        let mut state = seed.max(1);
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                alphabet[(state % alphabet.len() as u64) as usize]
            })
            .collect()
    }

    #[test]
    fn test_scenarios() {
        let cases: [(&[u8], &[u8], Vec<usize>); 5] = [
            (b"banana", b"ana", vec![1, 3]),
            (b"abcabcabc", b"abc", vec![0, 3, 6]),
            (b"aaaa", b"aa", vec![0, 1, 2]),
            (b"abc", b"xyz", vec![]),
            (b"a", b"a", vec![0]),
        ];

        for (text, pattern, expected) in cases {
            let tree = SuffixTree::build(text).unwrap();
            assert_eq!(tree.find_occurrences_sorted(pattern), expected);
            assert_eq!(tree.count_occurrences(pattern), expected.len());
        }
    }

    #[test]
    fn test_every_suffix_is_found_at_its_start() {
        for text in [&b"banana"[..], b"mississippi", b"aaaaaaa", b"abcabxabcd"] {
            let tree = SuffixTree::build(text).unwrap();
            for i in 0..text.len() {
                let suffix = &text[i..];
                let found = tree.find_occurrences_sorted(suffix);
                // a suffix may also occur earlier as an inner substring
                assert_eq!(found, naive(text, suffix));
                assert!(found.contains(&i));
            }
        }
    }

    #[test]
    fn test_unique_suffixes_have_single_occurrence() {
        let text = b"abcdefg";
        let tree = SuffixTree::build(text).unwrap();
        for i in 0..text.len() {
            assert_eq!(tree.find_occurrences(&text[i..]), vec![i]);
        }
    }

    #[test]
    fn test_all_substrings_match_naive_scan() {
        let texts = [
            pseudo_random(7, 60, b"ab"),
            pseudo_random(42, 80, b"acgt"),
            pseudo_random(1234, 50, b"abcdefghij"),
            b"abracadabra".to_vec(),
        ];

        for text in &texts {
            let tree = SuffixTree::build(text).unwrap();
            for i in 0..text.len() {
                for j in i + 1..=text.len() {
                    let pattern = &text[i..j];
                    assert_eq!(
                        tree.find_occurrences_sorted(pattern),
                        naive(text, pattern),
                        "pattern {:?}",
                        String::from_utf8_lossy(pattern)
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_substrings_are_empty() {
        let tree = SuffixTree::build(b"banana").unwrap();
        for pattern in [&b"x"[..], b"bb", b"nab", b"bananas", b"aa", b"nan a"] {
            assert!(tree.find_occurrences(pattern).is_empty());
            assert!(!tree.contains(pattern));
            assert_eq!(tree.count_occurrences(pattern), 0);
        }
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let tree = SuffixTree::build(b"abcabcabc").unwrap();
        let first = tree.find_occurrences(b"bc");
        for _ in 0..5 {
            assert_eq!(tree.find_occurrences(b"bc"), first);
        }
    }

    #[test]
    fn test_empty_pattern_matches_every_offset() {
        let tree = SuffixTree::build(b"abc").unwrap();
        assert_eq!(tree.find_occurrences_sorted(b""), vec![0, 1, 2]);
        assert!(tree.contains(b""));

        let empty = SuffixTree::build(b"").unwrap();
        assert!(empty.find_occurrences(b"").is_empty());
        assert!(!empty.contains(b""));
    }

    #[test]
    fn test_pattern_with_sentinel_never_matches() {
        let tree = SuffixTree::build(b"banana").unwrap();
        assert!(tree.find_occurrences(b"a\x00").is_empty());
        assert!(tree.find_occurrences(b"\x00").is_empty());
    }

    #[test]
    fn test_case_insensitive_queries() {
        let tree = SuffixTreeBuilder::new(SuffixTreeConfig {
            case_insensitive: true,
            ..Default::default()
        })
        .build(b"Hello HELLO hello")
        .unwrap();

        assert_eq!(tree.find_occurrences_sorted(b"hello"), vec![0, 6, 12]);
        assert_eq!(tree.find_occurrences_sorted(b"HeLlO"), vec![0, 6, 12]);
    }

    #[test]
    fn test_find_many() {
        let tree = SuffixTree::build(b"mississippi").unwrap();
        let results = tree.find_many(&["ss", "i", "q", "issi"]);
        assert_eq!(
            results,
            vec![vec![2, 5], vec![1, 4, 7, 10], vec![], vec![1, 4]]
        );
    }

    #[test]
    fn test_large_text_against_naive() {
        let text = pseudo_random(99, 5_000, b"abc");
        let tree = SuffixTree::build(&text).unwrap();
        for start in (0..text.len() - 12).step_by(97) {
            for len in [1, 3, 6, 12] {
                let pattern = &text[start..start + len];
                assert_eq!(tree.find_occurrences_sorted(pattern), naive(&text, pattern));
            }
        }
    }
}
