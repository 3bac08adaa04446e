//! Utility functions shared by the index and query layers.
//!
//! ## Modules
//!
//! - [`alphabet`] - Nucleotide symbol codec (A, C, G, T and the `$` terminator)
//! - [`tokenizer`] - Whitespace token splitting for documents
//! - [`progress`] - Progress bar that compiles away without the `progress` feature
//!
//! ```
//! use sufx::utils::{encode, decode, split_tokens};
//!
//! assert_eq!(encode('g'), Some(2));
//! assert_eq!(decode(2), Some('G'));
//!
//! let tokens: Vec<_> = split_tokens("ACGT CGTA").collect();
//! assert_eq!(tokens, vec![(0, "ACGT"), (1, "CGTA")]);
//! ```

pub mod alphabet;
pub mod progress;
pub mod tokenizer;

pub use alphabet::*;
pub use tokenizer::*;
