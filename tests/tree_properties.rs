//! Property tests for the generalized suffix tree.
//!
//! Every search result is checked against a brute-force scan of the
//! inserted tokens.

use proptest::prelude::*;
use sufx::{GeneralizedSuffixTree, Occurrence};

/// Insert tokens as (document i / 3, token i % 3)
fn build(tokens: &[String]) -> GeneralizedSuffixTree {
    let mut tree = GeneralizedSuffixTree::new();
    for (i, token) in tokens.iter().enumerate() {
        tree.add_string((i / 3) as u32, (i % 3) as u32, token).unwrap();
    }
    tree
}

/// Every (document, token, offset) whose terminated suffix starts with `query`
fn brute_force(tokens: &[String], query: &str) -> Vec<Occurrence> {
    let query = query.to_ascii_uppercase();
    let mut found = Vec::new();
    if query.is_empty() {
        return found;
    }
    for (i, token) in tokens.iter().enumerate() {
        let terminated = format!("{}$", token.to_ascii_uppercase());
        for offset in 0..token.len() {
            if terminated[offset..].starts_with(&query) {
                found.push(Occurrence::new((i / 3) as u32, (i % 3) as u32, offset));
            }
        }
    }
    found.sort();
    found
}

fn sorted(mut results: Vec<Occurrence>) -> Vec<Occurrence> {
    results.sort();
    results
}

proptest! {
    #[test]
    fn search_matches_brute_force(
        tokens in prop::collection::vec("[ACGTacgt]{1,10}", 1..10),
        query in "[ACGT$]{1,5}",
    ) {
        let tree = build(&tokens);
        let expected = brute_force(&tokens, &query);
        match tree.search(&query) {
            Some(results) => {
                prop_assert!(!results.is_empty());
                prop_assert_eq!(sorted(results), expected);
            }
            None => prop_assert!(expected.is_empty(), "missed {:?}", expected),
        }
    }

    #[test]
    fn every_suffix_is_found(tokens in prop::collection::vec("[ACGT]{1,12}", 1..8)) {
        let tree = build(&tokens);
        for (i, token) in tokens.iter().enumerate() {
            let expected = Occurrence::new((i / 3) as u32, (i % 3) as u32, 0);
            for offset in 0..token.len() {
                let suffix = format!("{}$", &token[offset..]);
                let results = tree.search(&suffix);
                prop_assert!(results.is_some(), "suffix {} not found", suffix);
                let results = results.unwrap();
                let want = Occurrence { offset, ..expected };
                prop_assert!(results.contains(&want), "{} missing from {:?}", want, results);
                prop_assert!(tree.is_suffix(&token[offset..]));
            }
        }
    }

    #[test]
    fn identical_tokens_share_occurrences(
        token in "[ACGT]{1,8}",
        copies in 2usize..6,
    ) {
        let tokens = vec![token.clone(); copies];
        let tree = build(&tokens);
        let nodes = build(&tokens[..1]).node_count();
        prop_assert_eq!(tree.node_count(), nodes);

        for offset in 0..token.len() {
            let suffix = format!("{}$", &token[offset..]);
            let results = tree.search(&suffix).unwrap();
            prop_assert_eq!(results.len(), copies);
        }
    }

    #[test]
    fn prefixes_of_found_queries_are_found(
        tokens in prop::collection::vec("[ACGT]{1,10}", 1..6),
        pick in 0usize..6,
    ) {
        let token = &tokens[pick % tokens.len()];
        let tree = build(&tokens);
        for len in 1..=token.len() {
            prop_assert!(tree.contains(&token[..len]));
            prop_assert!(tree.count(&token[..len]) >= tree.count(token));
        }
    }

    #[test]
    fn repeated_search_is_stable(
        tokens in prop::collection::vec("[ACGT]{1,10}", 1..6),
        query in "[ACGT]{1,4}",
    ) {
        let tree = build(&tokens);
        let first = tree.search(&query).map(sorted);
        let second = tree.search(&query).map(sorted);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn foreign_symbols_never_match(
        tokens in prop::collection::vec("[ACGT]{1,10}", 1..6),
        query in "[ACGT]{0,3}[NUXnux][ACGT]{0,3}",
    ) {
        let tree = build(&tokens);
        prop_assert_eq!(tree.search(&query), None);
        prop_assert_eq!(tree.count(&query), 0);
    }

    #[test]
    fn stats_account_for_every_suffix(tokens in prop::collection::vec("[ACGT]{1,10}", 1..8)) {
        let tree = build(&tokens);
        let stats = tree.stats();
        let suffixes: usize = tokens.iter().map(String::len).sum();
        prop_assert_eq!(stats.occurrences, suffixes);
        prop_assert_eq!(stats.nodes, 1 + stats.internal_nodes + stats.leaves);
    }
}

#[test]
fn example_scenario() {
    let mut tree = GeneralizedSuffixTree::new();
    tree.add_string(0, 0, "ACGT").unwrap();
    tree.add_string(1, 0, "CGTA").unwrap();

    let results = sorted(tree.search("CG").unwrap());
    assert_eq!(
        results,
        vec![Occurrence::new(0, 0, 1), Occurrence::new(1, 0, 0)]
    );
    assert_eq!(tree.search("GTAC"), None);
    assert_eq!(tree.search("$"), None);
}

#[test]
fn terminator_anchors_nested_repeats() {
    let mut tree = GeneralizedSuffixTree::new();
    tree.add_string(0, 0, "AAAA").unwrap();
    tree.add_string(0, 1, "GA").unwrap();
    tree.add_string(1, 0, "aa").unwrap();

    let ends = sorted(tree.search("A$").unwrap());
    assert_eq!(
        ends,
        vec![
            Occurrence::new(0, 0, 3),
            Occurrence::new(0, 1, 1),
            Occurrence::new(1, 0, 1),
        ]
    );
    assert_eq!(tree.count("AA"), 4);
    assert_eq!(tree.count("AA$"), 2);
    assert_eq!(tree.search("A$C"), None);
    assert_eq!(tree.search("$"), None);
}

#[test]
fn long_token_does_not_overflow_the_stack() {
    let token: String = "ACGT".repeat(500);
    let mut tree = GeneralizedSuffixTree::new();
    tree.add_string(0, 0, &token).unwrap();
    assert_eq!(tree.count("ACGT"), 500);
    assert_eq!(tree.count(&token), 1);
}
