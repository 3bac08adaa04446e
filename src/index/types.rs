use serde::{Deserialize, Serialize};
use std::fmt;

/// Document identifier assigned by the loader (0-based, file order)
pub type DocumentId = u32;

/// Token identifier within a document (0-based, whitespace-split order)
pub type TokenId = u32;

/// Index into the string registry, assigned at insertion time
pub type StringId = usize;

/// Arena index of a tree node. Doubles as the diagnostic node id.
pub type NodeId = usize;

/// Where a suffix occurrence came from in the document corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub document_id: DocumentId,
    pub token_id: TokenId,
    /// Symbol offset within the token where the suffix starts
    pub offset: usize,
}

impl Occurrence {
    pub const fn new(document_id: DocumentId, token_id: TokenId, offset: usize) -> Self {
        Self {
            document_id,
            token_id,
            offset,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.document_id, self.token_id, self.offset)
    }
}

/// Incoming edge label of a node: `strings[string_id][begin..=end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLabel {
    pub string_id: StringId,
    pub begin: usize,
    /// Inclusive
    pub end: usize,
}

impl EdgeLabel {
    pub const fn new(string_id: StringId, begin: usize, end: usize) -> Self {
        Self {
            string_id,
            begin,
            end,
        }
    }

    /// Number of symbols on the edge. Never zero for a well-formed label.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end + 1 - self.begin
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end < self.begin
    }
}

/// What the loader does with a token the alphabet rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidTokenPolicy {
    /// Log a warning and keep loading
    #[default]
    Skip,
    /// Abort the whole load
    Fail,
}

/// Index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub invalid_tokens: InvalidTokenPolicy,
    /// Longest token (in symbols) accepted by the loader
    pub max_token_length: usize,
    pub show_progress: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            invalid_tokens: InvalidTokenPolicy::Skip,
            max_token_length: 1024 * 1024,
            show_progress: true,
        }
    }
}

impl IndexConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.max_token_length == 0 {
            return Err(crate::Error::Config(
                "max_token_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
