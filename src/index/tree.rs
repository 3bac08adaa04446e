//! Generalized suffix tree over nucleotide tokens
//!
//! Construction is the naive repeated-insertion algorithm: every suffix of
//! every token is inserted by walking down from the root, splitting an edge
//! where the new suffix diverges mid-edge. This is quadratic in token length.
//! Suffix links are recorded on split nodes but never used to shortcut the
//! descent.
//!
//! Each token gets the `$` terminator appended before insertion so that
//! every suffix ends at its own leaf. Identical suffixes coming from different
//! tokens land on the same leaf and share its occurrence list.

use super::node::Node;
use super::types::{DocumentId, EdgeLabel, NodeId, Occurrence, StringId, TokenId};
use crate::error::Result;
use crate::query::QueryExecutor;
use crate::utils::alphabet::{Symbol, encode_token, symbols_to_string};
use std::io::{self, Write};
use tracing::trace;

/// Arena index of the root once it exists
pub const ROOT: NodeId = 0;

#[derive(Debug, Default)]
pub struct GeneralizedSuffixTree {
    nodes: Vec<Node>,
    /// Append-only registry of inserted strings, terminator included
    strings: Vec<Vec<Symbol>>,
    /// Most recent split node, waiting for its suffix link
    pending_link: Option<NodeId>,
}

impl GeneralizedSuffixTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` with a terminator appended and insert all of its
    /// suffixes except the bare terminator.
    ///
    /// The token is validated in full first; on error nothing is inserted and
    /// no string id is consumed.
    pub fn add_string(
        &mut self,
        document_id: DocumentId,
        token_id: TokenId,
        content: &str,
    ) -> Result<StringId> {
        let mut symbols = encode_token(content)?;
        symbols.push(Symbol::Terminator);

        let len = symbols.len();
        let string_id = self.strings.len();
        self.strings.push(symbols);

        trace!(document_id, token_id, string_id, len, "adding string");
        for start in 0..len - 1 {
            self.insert_suffix(document_id, token_id, string_id, start);
        }

        Ok(string_id)
    }

    /// Insert the suffix of registered string `string_id` starting at
    /// `start_offset`, always descending from the root.
    ///
    /// # Panics
    ///
    /// Panics if `string_id` is not registered or `start_offset` does not
    /// leave at least one symbol before the terminator.
    pub fn insert_suffix(
        &mut self,
        document_id: DocumentId,
        token_id: TokenId,
        string_id: StringId,
        start_offset: usize,
    ) {
        assert!(
            string_id < self.strings.len(),
            "string {string_id} is not registered"
        );
        let len = self.strings[string_id].len();
        assert!(
            start_offset + 1 < len,
            "suffix {start_offset} of string {string_id} (len {len}) is the bare terminator or out of range"
        );

        trace!(string_id, start_offset, "inserting suffix");
        let occurrence = Occurrence::new(document_id, token_id, start_offset);
        let mut node = self.ensure_root();
        let mut pos = start_offset;

        loop {
            let symbol = self.strings[string_id][pos];
            let Some(child) = self.nodes[node].child(symbol) else {
                let label = EdgeLabel::new(string_id, pos, len - 1);
                self.attach_leaf(node, symbol, label, occurrence);
                return;
            };

            let label = self.edge_label(child);
            let matched = self.match_edge(label, string_id, pos);

            if matched == label.len() {
                pos += matched;
                if pos == len {
                    // Both edge and suffix ended on a terminator: same suffix.
                    match self.nodes[child].leaf.as_mut() {
                        Some(leaf) => leaf.push(occurrence),
                        None => panic!("node {child} ends on a terminator but has no leaf"),
                    }
                    return;
                }
                node = child;
                continue;
            }

            // The terminator only matches at the end of both strings, so a
            // suffix can never run out strictly inside an edge.
            assert!(
                pos + matched < len,
                "suffix {start_offset} of string {string_id} exhausted inside edge of node {child}"
            );
            self.split_edge(node, child, matched, string_id, pos, occurrence);
            return;
        }
    }

    fn ensure_root(&mut self) -> NodeId {
        if self.nodes.is_empty() {
            self.nodes.push(Node::new_root(ROOT));
        }
        ROOT
    }

    fn next_id(&self) -> NodeId {
        self.nodes.len()
    }

    fn edge_label(&self, node: NodeId) -> EdgeLabel {
        match self.nodes[node].label {
            Some(label) => label,
            None => panic!("non-root node {node} has no edge label"),
        }
    }

    /// Count symbols of `label` matched by `strings[string_id][pos..]`
    fn match_edge(&self, label: EdgeLabel, string_id: StringId, pos: usize) -> usize {
        let edge = &self.strings[label.string_id][label.begin..=label.end];
        let rest = &self.strings[string_id][pos..];
        edge.iter()
            .zip(rest)
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn attach_leaf(
        &mut self,
        parent: NodeId,
        symbol: Symbol,
        label: EdgeLabel,
        occurrence: Occurrence,
    ) -> NodeId {
        let id = self.next_id();
        self.nodes.push(Node::new_leaf(id, parent, label, occurrence));
        self.nodes[parent].children[symbol.code()] = Some(id);
        id
    }

    /// Split the edge into `child` after `matched` symbols and hang a new
    /// leaf for the rest of the suffix starting at `pos` off the new node.
    fn split_edge(
        &mut self,
        parent: NodeId,
        child: NodeId,
        matched: usize,
        string_id: StringId,
        pos: usize,
        occurrence: Occurrence,
    ) {
        assert!(matched > 0, "edge into node {child} split before its first symbol");

        let label = self.edge_label(child);
        let first = self.strings[label.string_id][label.begin];
        let old_next = self.strings[label.string_id][label.begin + matched];
        let new_next = self.strings[string_id][pos + matched];
        debug_assert_ne!(old_next, new_next);

        let mid = self.next_id();
        let mut split = Node::new_internal(
            mid,
            parent,
            EdgeLabel::new(label.string_id, label.begin, label.begin + matched - 1),
        );
        split.suffix_link = Some(ROOT);
        split.children[old_next.code()] = Some(child);
        self.nodes.push(split);

        let lower = &mut self.nodes[child];
        lower.parent = Some(mid);
        lower.label = Some(EdgeLabel::new(label.string_id, label.begin + matched, label.end));

        let len = self.strings[string_id].len();
        let leaf = self.attach_leaf(
            mid,
            new_next,
            EdgeLabel::new(string_id, pos + matched, len - 1),
            occurrence,
        );
        self.nodes[parent].children[first.code()] = Some(mid);

        if let Some(previous) = self.pending_link {
            self.nodes[previous].suffix_link = Some(mid);
        }
        self.pending_link = Some(mid);

        trace!(parent, child, mid, leaf, matched, "split edge");
    }

    /// Root node id, or `None` before the first suffix is inserted
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() { None } else { Some(ROOT) }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Registered string, terminator included
    pub fn string(&self, id: StringId) -> Option<&[Symbol]> {
        self.strings.get(id).map(Vec::as_slice)
    }

    /// Number of registered strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Symbols spelled by an edge label
    pub fn label_symbols(&self, label: EdgeLabel) -> &[Symbol] {
        &self.strings[label.string_id][label.begin..=label.end]
    }

    /// Every occurrence of `query`, or `None` when it does not occur
    pub fn search(&self, query: &str) -> Option<Vec<Occurrence>> {
        QueryExecutor::new(self).search(query)
    }

    pub fn contains(&self, query: &str) -> bool {
        QueryExecutor::new(self).contains(query)
    }

    /// Whether `query` is a suffix of some inserted token
    pub fn is_suffix(&self, query: &str) -> bool {
        QueryExecutor::new(self).is_suffix(query)
    }

    pub fn count(&self, query: &str) -> usize {
        QueryExecutor::new(self).count(query)
    }

    /// Write a preorder dump of every node. Debugging aid only, the format
    /// is not stable.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(root) = self.root() else {
            return writeln!(out, "(empty tree)");
        };

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            self.dump_node(node, out)?;
            stack.extend(node.children().rev().map(|(_, child)| child));
        }
        Ok(())
    }

    fn dump_node<W: Write>(&self, node: &Node, out: &mut W) -> io::Result<()> {
        write!(out, "{} :: {{ edge: ", node.id())?;
        match node.label() {
            Some(label) => write!(
                out,
                "({}, {}..={}) {:?}",
                label.string_id,
                label.begin,
                label.end,
                symbols_to_string(self.label_symbols(label))
            )?,
            None => write!(out, "(-1, -1..=-1)")?,
        }

        write!(out, ", children: [")?;
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            match node.child(*symbol) {
                Some(child) => write!(out, "{symbol}:{child}")?,
                None => write!(out, "{symbol}:-")?,
            }
        }
        write!(out, "]")?;

        let parent = node.parent().map_or_else(|| "-".to_string(), |p| p.to_string());
        let link = node
            .suffix_link()
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        writeln!(out, ", parent: {parent}, suffix_link: {link} }}")?;

        if let Some(leaf) = node.leaf() {
            write!(out, "\toccurrences:")?;
            for occurrence in leaf.occurrences() {
                write!(out, " {occurrence}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
