#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use saphrase::{BuildAlgorithm, IndexConfig, SuffixArrayBuilder};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let build = |algorithm| {
        SuffixArrayBuilder::new(IndexConfig {
            algorithm,
            ..Default::default()
        })
        .build(input.text.as_slice())
    };
    let sa = build(BuildAlgorithm::InducedSorting);
    assert_eq!(sa, build(BuildAlgorithm::Comparison));

    let entries = sa.entries();
    for pair in entries.windows(2) {
        assert!(input.text[pair[0]..] < input.text[pair[1]..]);
    }

    let matcher = saphrase::Matcher::new(input.text.as_slice(), &sa);
    let found = matcher.find_all(&input.pattern);
    let expected: Vec<usize> = if input.pattern.is_empty() {
        Vec::new()
    } else {
        (0..input.text.len())
            .filter(|&i| input.text[i..].starts_with(&input.pattern))
            .collect()
    };
    assert_eq!(found.as_slice(), expected.as_slice());
});
