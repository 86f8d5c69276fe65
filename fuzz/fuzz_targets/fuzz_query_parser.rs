#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing is lenient and must never panic
    let query = saphrase::query::parse_query(data);

    // The tree keeps every word the tokenizer saw, in order
    let words = saphrase::query::extract_words(data);
    assert_eq!(query.words(), words);

    // Rendering a tree and parsing it again gives the same tree
    assert_eq!(saphrase::query::parse_query(&query.to_string()), query);
});
