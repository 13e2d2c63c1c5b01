#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sfx::index::SuffixTree;

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Texts holding the default sentinel must be rejected, never mis-built
    let Ok(tree) = SuffixTree::build(&input.text) else {
        assert!(input.text.contains(&0));
        return;
    };
    assert_eq!(tree.leaf_count(), input.text.len() + 1);

    if input.pattern.is_empty() || input.pattern.len() > input.text.len() {
        return;
    }
    let expected: Vec<usize> = input
        .text
        .windows(input.pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == input.pattern.as_slice())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(tree.find_occurrences_sorted(&input.pattern), expected);
});
