//! Document loading
//!
//! Reads document files, splits them into whitespace tokens and feeds every
//! token to the tree. Files are read in parallel; insertion is sequential
//! and follows the order of the path list, which also fixes document ids.

use crate::index::tree::GeneralizedSuffixTree;
use crate::index::types::{DocumentId, IndexConfig, InvalidTokenPolicy, TokenId};
use crate::utils::progress::document_bar;
use crate::utils::split_tokens;
use crate::Error;
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Totals for one load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub documents: usize,
    pub tokens_indexed: usize,
    pub tokens_skipped: usize,
}

/// Read every document and insert its tokens. Document `i` is `paths[i]`.
pub fn load_documents<P: AsRef<Path> + Sync>(
    tree: &mut GeneralizedSuffixTree,
    paths: &[P],
    config: &IndexConfig,
) -> Result<LoadSummary> {
    config.validate()?;

    // Phase 1: read all documents in parallel
    let contents: Vec<(PathBuf, String)> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            fs::read_to_string(path)
                .with_context(|| format!("failed to read document {}", path.display()))
                .map(|content| (path.to_path_buf(), content))
        })
        .collect::<Result<_>>()?;

    // Phase 2: insert in document order
    let bar = document_bar(contents.len() as u64, config.show_progress);
    let mut summary = LoadSummary::default();

    for (document_id, (path, content)) in contents.iter().enumerate() {
        bar.set_message(path.display().to_string());
        let document_id: DocumentId = narrow_id(document_id, "documents")?;
        let doc = load_document(tree, document_id, content, config)
            .with_context(|| format!("failed to index document {}", path.display()))?;

        debug!(
            document_id,
            path = %path.display(),
            indexed = doc.tokens_indexed,
            skipped = doc.tokens_skipped,
            "indexed document"
        );
        summary.documents += 1;
        summary.tokens_indexed += doc.tokens_indexed;
        summary.tokens_skipped += doc.tokens_skipped;
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(
        documents = summary.documents,
        tokens = summary.tokens_indexed,
        skipped = summary.tokens_skipped,
        nodes = tree.node_count(),
        "load complete"
    );
    Ok(summary)
}

/// Insert the tokens of one document's text
pub fn load_document(
    tree: &mut GeneralizedSuffixTree,
    document_id: DocumentId,
    content: &str,
    config: &IndexConfig,
) -> Result<LoadSummary> {
    let mut summary = LoadSummary {
        documents: 1,
        ..LoadSummary::default()
    };

    for (position, token) in split_tokens(content) {
        let token_id: TokenId = narrow_id(position, "tokens")
            .with_context(|| format!("document {document_id}"))?;
        match insert_token(tree, document_id, token_id, token, config) {
            Ok(()) => summary.tokens_indexed += 1,
            Err(err) if config.invalid_tokens == InvalidTokenPolicy::Skip => {
                warn!(document_id, token_id, %err, "skipping token");
                summary.tokens_skipped += 1;
            }
            Err(err) => bail!("token {token_id} of document {document_id}: {err}"),
        }
    }

    Ok(summary)
}

fn insert_token(
    tree: &mut GeneralizedSuffixTree,
    document_id: DocumentId,
    token_id: TokenId,
    token: &str,
    config: &IndexConfig,
) -> crate::Result<()> {
    let len = token.chars().count();
    if len > config.max_token_length {
        return Err(Error::TokenTooLong {
            len,
            max: config.max_token_length,
        });
    }
    tree.add_string(document_id, token_id, token)?;
    Ok(())
}

/// Document and token ids are 32-bit; refuse to wrap past that
fn narrow_id(index: usize, what: &str) -> Result<u32> {
    u32::try_from(index).with_context(|| format!("too many {what}: {index} does not fit a 32-bit id"))
}

/// Read an optional JSON config file, falling back to defaults
pub fn load_config(path: Option<&Path>) -> Result<IndexConfig> {
    let Some(path) = path else {
        return Ok(IndexConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    IndexConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}
