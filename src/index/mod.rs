pub mod build;
pub mod node;
pub mod stats;
pub mod tree;
pub mod types;

pub use node::{LeafPayload, Node};
pub use stats::TreeStats;
pub use tree::GeneralizedSuffixTree;
pub use types::*;
