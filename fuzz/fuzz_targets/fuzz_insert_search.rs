#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    tokens: Vec<String>,
    queries: Vec<String>,
}

fuzz_target!(|input: Input| {
    // Arbitrary tokens and queries must never panic; rejected tokens leave
    // the tree untouched
    let mut tree = sufx::GeneralizedSuffixTree::new();
    for (i, token) in input.tokens.iter().take(64).enumerate() {
        let nodes = tree.node_count();
        if tree.add_string(0, i as u32, token).is_err() {
            assert_eq!(tree.node_count(), nodes);
        }
    }
    for query in &input.queries {
        let found = tree.search(query);
        assert_eq!(found.as_ref().map_or(0, Vec::len), tree.count(query));
        assert_eq!(found.is_some(), tree.contains(query));
    }
});
