use crate::index::tree::GeneralizedSuffixTree;
use crate::index::types::{NodeId, Occurrence};
use crate::query::parser::{Query, parse_query};
use crate::utils::alphabet::Symbol;

/// Query executor
///
/// Descends from the root matching the query edge by edge, then gathers
/// every leaf below the point where the query ran out.
pub struct QueryExecutor<'a> {
    tree: &'a GeneralizedSuffixTree,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(tree: &'a GeneralizedSuffixTree) -> Self {
        Self { tree }
    }

    /// Execute a query and return every occurrence, or `None` if the query
    /// does not occur. Empty and out-of-alphabet queries never occur.
    pub fn execute(&self, query: &Query) -> Option<Vec<Occurrence>> {
        let node = self.locate(query)?;
        let mut results = Vec::new();
        self.collect_leaves(node, &mut results);
        Some(results)
    }

    pub fn search(&self, query: &str) -> Option<Vec<Occurrence>> {
        self.execute(&parse_query(query))
    }

    pub fn contains(&self, query: &str) -> bool {
        self.locate(&parse_query(query)).is_some()
    }

    /// Whether `query` matches the tail of some token
    pub fn is_suffix(&self, query: &str) -> bool {
        self.locate(&parse_query(query).anchored()).is_some()
    }

    /// Number of occurrences, without materializing them
    pub fn count(&self, query: &str) -> usize {
        let Some(node) = self.locate(&parse_query(query)) else {
            return 0;
        };
        let mut total = 0;
        self.walk_leaves(node, |occurrences| total += occurrences.len());
        total
    }

    /// Find the shallowest node whose subtree holds exactly the matches of
    /// `query`
    pub fn locate(&self, query: &Query) -> Option<NodeId> {
        if !query.is_searchable() {
            return None;
        }
        let symbols = query.symbols.as_deref()?;
        self.descend(symbols)
    }

    fn descend(&self, query: &[Symbol]) -> Option<NodeId> {
        let mut node = self.tree.root()?;
        let mut rest = query;

        loop {
            let Some(&next) = rest.first() else {
                return Some(node);
            };
            let child = self.tree.node(node)?.child(next)?;
            let label = self.tree.node(child)?.label()?;
            let edge = self.tree.label_symbols(label);

            let n = edge.len().min(rest.len());
            if edge[..n] != rest[..n] {
                return None;
            }
            if n == edge.len() {
                // Consumed the whole edge, continue below the child
                rest = &rest[n..];
                node = child;
            } else {
                // Query ran out inside the edge
                return Some(child);
            }
        }
    }

    /// Append every occurrence in the subtree rooted at `node`, visiting
    /// children in symbol-code order and leaf occurrences in insertion order.
    pub fn collect_leaves(&self, node: NodeId, results: &mut Vec<Occurrence>) {
        self.walk_leaves(node, |occurrences| results.extend_from_slice(occurrences));
    }

    /// Preorder walk with an explicit stack; same order as the recursive
    /// formulation.
    fn walk_leaves<F>(&self, node: NodeId, mut visit: F)
    where
        F: FnMut(&[Occurrence]),
    {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let Some(current) = self.tree.node(id) else {
                continue;
            };
            match current.leaf() {
                Some(leaf) => visit(leaf.occurrences()),
                None => stack.extend(current.children().rev().map(|(_, child)| child)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::tree::ROOT;

    fn sample_tree() -> GeneralizedSuffixTree {
        let mut tree = GeneralizedSuffixTree::new();
        tree.add_string(0, 0, "ACGT").unwrap();
        tree.add_string(1, 0, "CGTA").unwrap();
        tree
    }

    #[test]
    fn test_shared_substring() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        let results = executor.search("CG").unwrap();
        assert_eq!(
            results,
            vec![Occurrence::new(1, 0, 0), Occurrence::new(0, 0, 1)]
        );
    }

    #[test]
    fn test_non_contiguous_query() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        assert_eq!(executor.search("GTAC"), None);
        assert_eq!(executor.search("AA"), None);
        assert!(!executor.contains("TT"));
    }

    #[test]
    fn test_bare_terminator_not_found() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        assert_eq!(executor.search("$"), None);
        assert_eq!(executor.search("$$"), None);
    }

    #[test]
    fn test_malformed_queries_not_found() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        assert_eq!(executor.search(""), None);
        assert_eq!(executor.search("CGN"), None);
        assert_eq!(executor.count("CGN"), 0);
    }

    #[test]
    fn test_case_insensitive_query() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        assert_eq!(executor.search("cg"), executor.search("CG"));
    }

    #[test]
    fn test_query_ending_mid_edge() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        // "AC" stops inside the edge below the "A" split node
        assert_eq!(executor.search("AC").unwrap(), vec![Occurrence::new(0, 0, 0)]);
        assert_eq!(executor.search("ACGT").unwrap(), vec![Occurrence::new(0, 0, 0)]);
    }

    #[test]
    fn test_is_suffix() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        assert!(executor.is_suffix("GT"));
        assert!(executor.is_suffix("TA"));
        assert!(executor.is_suffix("gt$"));
        assert!(!executor.is_suffix("CG"));
        assert!(!executor.is_suffix(""));
        assert_eq!(
            executor.search("T$").unwrap(),
            vec![Occurrence::new(0, 0, 3)]
        );
    }

    #[test]
    fn test_count_matches_search() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        for query in ["A", "C", "G", "T", "CG", "GT", "TA", "ACGT"] {
            assert_eq!(
                executor.count(query),
                executor.search(query).map_or(0, |r| r.len()),
                "count mismatch for {query}"
            );
        }
        assert_eq!(executor.count("T"), 2);
    }

    #[test]
    fn test_collect_from_root_returns_every_suffix() {
        let tree = sample_tree();
        let executor = QueryExecutor::new(&tree);
        let mut all = Vec::new();
        executor.collect_leaves(ROOT, &mut all);
        assert_eq!(all.len(), 8);
    }
}
