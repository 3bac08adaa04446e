//! # sufx - Generalized suffix tree search over nucleotide tokens
//!
//! sufx indexes whitespace-separated tokens of A/C/G/T text from a set of
//! documents into one generalized suffix tree and answers exact substring
//! queries with every `(document, token, offset)` where the query occurs.
//!
//! ## Architecture
//!
//! - [`utils`] - Alphabet codec, tokenizer, progress bar
//! - [`index`] - Tree construction, diagnostics, document loading
//! - [`query`] - Query parsing and execution (descent + leaf collection)
//! - [`output`] - Result formatting (colored text and JSON lines)
//!
//! ## Quick Start
//!
//! ```
//! use sufx::index::GeneralizedSuffixTree;
//! use sufx::Occurrence;
//!
//! let mut tree = GeneralizedSuffixTree::new();
//! tree.add_string(0, 0, "ACGT").unwrap();
//! tree.add_string(1, 0, "CGTA").unwrap();
//!
//! let mut hits = tree.search("CG").unwrap();
//! hits.sort();
//! assert_eq!(hits, vec![Occurrence::new(0, 0, 1), Occurrence::new(1, 0, 0)]);
//! assert!(tree.search("GTAC").is_none());
//! ```
//!
//! Construction inserts each suffix by descending from the root and is
//! quadratic in token length. The tree is built once and then queried; it
//! supports no removal and no concurrent mutation.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{Error, Result};
pub use index::{GeneralizedSuffixTree, Occurrence};
