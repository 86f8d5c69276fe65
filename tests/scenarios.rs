//! End-to-end behaviour of the public API on small known corpora.

use saphrase::{
    BuildAlgorithm, Corpus, Error, GroupOp, GroupedQuery, IndexConfig, OccurrenceSet, TextIndex,
    Utf8, extract_words, ops, parse_query,
};
use std::sync::{Arc, OnceLock};
use std::thread;

const PLAY: &str = "Romeo and Juliet. O Romeo, Romeo! wherefore art thou Romeo? \
                    Deny thy father and refuse thy name. Juliet loves Romeo.";

static PLAY_INDEX: OnceLock<TextIndex> = OnceLock::new();

/// Shared index over a short passage (singleton)
fn play_index() -> &'static TextIndex {
    PLAY_INDEX.get_or_init(|| TextIndex::new(PLAY))
}

fn naive_find(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == pattern[..])
        .collect()
}

#[test]
fn test_banana() {
    let index = TextIndex::new("banana");
    assert_eq!(index.find_all("ana"), [1, 3]);
    assert_eq!(index.count("na"), 2);
    assert!(!index.exists("xyz"));
}

#[test]
fn test_set_algebra() {
    let a = OccurrenceSet::from([1, 3, 5, 7, 9]);
    let b = OccurrenceSet::from([2, 3, 5, 8, 10]);
    assert_eq!(ops::intersect(&a, &b), [3, 5]);
    assert_eq!(ops::union(&a, &b), [1, 2, 3, 5, 7, 8, 9, 10]);
    assert_eq!(ops::difference(&a, &b), [1, 7, 9]);

    assert_eq!(&a & &b, ops::intersect(&a, &b));
    assert_eq!(&a | &b, ops::union(&a, &b));
    assert_eq!(&a - &b, ops::difference(&a, &b));
}

#[test]
fn test_word_extraction() {
    assert_eq!(extract_words("Romeo _AND_ Juliet"), ["Romeo", "Juliet"]);
}

#[test]
fn test_wide_characters() {
    let index = TextIndex::new("罗密欧与朱丽叶。罗密欧爱朱丽叶。");
    assert_eq!(index.find_all("罗密欧"), [0, 8]);
    assert_eq!(index.find_all("朱丽叶"), [4, 12]);
    assert_eq!(index.corpus().slice(8, 3), "罗密欧");
}

#[test]
fn test_grouped_and_window() {
    // w1 at 5 and w2 at 10
    let near = TextIndex::new("....|AAAA|BBBB|.........");
    let group = GroupedQuery::and("AAAA", "BBBB");
    assert_eq!(near.find_all("AAAA"), [5]);
    assert_eq!(near.find_all("BBBB"), [10]);
    assert!(near.search_group(&group, Some(7)).unwrap().contains(5));

    // w2 only at 20
    let far = TextIndex::new("....|AAAA|..........BBBB|");
    assert_eq!(far.find_all("BBBB"), [20]);
    assert!(!far.search_group(&group, Some(7)).unwrap().contains(5));
}

#[test]
fn test_parsed_query_to_grouped_search() {
    let index = play_index();
    let query = parse_query("Juliet _AND_ Romeo");
    let group = query.to_group().unwrap();
    assert_eq!(group.op(), GroupOp::And);

    let hits = index.search_group(&group, Some(13)).unwrap();
    // "Romeo and Juliet" merges to the Romeo offset; "Juliet loves Romeo" to Juliet's
    assert_eq!(hits, [0, index.find_all("Juliet")[1]]);
}

#[test]
fn test_single_word_query() {
    let index = play_index();
    let query = parse_query("Romeo");
    assert!(query.to_group().is_none());
    let word = query.single_word().unwrap();
    assert_eq!(index.find_all(word).as_slice(), naive_find(PLAY, "Romeo"));
    assert_eq!(index.count(word), 5);
}

#[test]
fn test_matcher_agrees_with_scan() {
    let index = play_index();
    for pattern in ["Romeo", "o", "thy", "R", "Juliet.", "e ", "zzz", ". "] {
        assert_eq!(
            index.find_all(pattern).as_slice(),
            naive_find(PLAY, pattern),
            "{}",
            pattern
        );
    }
}

#[test]
fn test_negative_distance_is_an_error() {
    let index = play_index();
    assert_eq!(
        index.find_near("Romeo", "Juliet", -3),
        Err(Error::NegativeDistance(-3))
    );
    let group = GroupedQuery::or("Romeo", "Juliet");
    assert!(index.search_group(&group, Some(-1)).is_err());
}

#[test]
fn test_empty_everything() {
    let index = TextIndex::new("");
    assert!(index.find_all("").is_empty());
    assert!(index.find_all("a").is_empty());
    let group = GroupedQuery::from_words(GroupOp::Or, Vec::<String>::new());
    assert!(index.search_group(&group, None).unwrap().is_empty());
    assert!(ops::fold_within_all(&[], 5).unwrap().is_empty());
    assert!(parse_query("").is_empty());
}

#[test]
fn test_decoded_corpus() {
    let corpus = Corpus::decode("naïve café".as_bytes(), &Utf8).unwrap();
    let index = TextIndex::new(corpus);
    assert_eq!(index.find_all("café"), [6]);

    let err = Corpus::decode(&[b'a', 0xff], &Utf8).unwrap_err();
    assert_eq!(
        err,
        Error::Decode {
            encoding: "utf-8",
            offset: 1
        }
    );
}

#[test]
fn test_config_from_json() {
    let config =
        IndexConfig::from_json(r#"{"algorithm": "comparison", "case_insensitive": true}"#)
            .unwrap();
    assert_eq!(config.algorithm, BuildAlgorithm::Comparison);
    let index = TextIndex::with_config(PLAY, config);
    assert_eq!(index.count("romeo"), 5);

    assert!(matches!(
        IndexConfig::from_json("{not json"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_shared_across_threads() {
    let index = Arc::new(TextIndex::new(PLAY.repeat(20)));
    let expected = index.find_all("Juliet");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.find_all("Juliet"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(expected.len(), 40);
}
