//! Tree nodes
//!
//! Nodes live in an arena owned by [`GeneralizedSuffixTree`](super::GeneralizedSuffixTree)
//! and reference each other by [`NodeId`]. Child slots own their subtree; the
//! parent and suffix-link fields are plain back-references.

use super::types::{EdgeLabel, NodeId, Occurrence};
use crate::utils::alphabet::{ALPHABET_SIZE, Symbol};

/// Occurrences of one suffix, in insertion order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPayload {
    occurrences: Vec<Occurrence>,
}

impl LeafPayload {
    pub(crate) fn new(first: Occurrence) -> Self {
        Self {
            occurrences: vec![first],
        }
    }

    pub(crate) fn push(&mut self, occurrence: Occurrence) {
        self.occurrences.push(occurrence);
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    /// `None` only for the root
    pub(crate) label: Option<EdgeLabel>,
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) parent: Option<NodeId>,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) leaf: Option<LeafPayload>,
}

impl Node {
    pub(crate) fn new_root(id: NodeId) -> Self {
        Self {
            id,
            label: None,
            children: [None; ALPHABET_SIZE],
            parent: None,
            suffix_link: Some(id),
            leaf: None,
        }
    }

    pub(crate) fn new_internal(id: NodeId, parent: NodeId, label: EdgeLabel) -> Self {
        Self {
            id,
            label: Some(label),
            children: [None; ALPHABET_SIZE],
            parent: Some(parent),
            suffix_link: None,
            leaf: None,
        }
    }

    pub(crate) fn new_leaf(id: NodeId, parent: NodeId, label: EdgeLabel, occurrence: Occurrence) -> Self {
        Self {
            leaf: Some(LeafPayload::new(occurrence)),
            ..Self::new_internal(id, parent, label)
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.label.is_none()
    }

    pub fn label(&self) -> Option<EdgeLabel> {
        self.label
    }

    pub fn child(&self, symbol: Symbol) -> Option<NodeId> {
        self.children[symbol.code()]
    }

    /// Present children in symbol-code order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (Symbol, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(code, child)| child.map(|id| (Symbol::ALL[code], id)))
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    pub fn leaf(&self) -> Option<&LeafPayload> {
        self.leaf.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }
}
