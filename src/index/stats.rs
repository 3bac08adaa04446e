use super::tree::GeneralizedSuffixTree;
use serde::Serialize;
use std::io::{self, Write};

/// Shape of a built tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TreeStats {
    /// Registered strings
    pub strings: usize,
    /// Total symbols stored, terminators included
    pub symbols: usize,
    pub nodes: usize,
    /// Non-root nodes without a leaf payload
    pub internal_nodes: usize,
    pub leaves: usize,
    pub occurrences: usize,
    /// Longest root-to-node path, in symbols
    pub max_depth: usize,
}

impl GeneralizedSuffixTree {
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            strings: self.len(),
            symbols: (0..self.len())
                .filter_map(|id| self.string(id))
                .map(<[_]>::len)
                .sum(),
            nodes: self.node_count(),
            ..TreeStats::default()
        };

        let Some(root) = self.root() else {
            return stats;
        };

        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes()[id];
            let depth = depth + node.label().map_or(0, |label| label.len());
            stats.max_depth = stats.max_depth.max(depth);

            match node.leaf() {
                Some(leaf) => {
                    stats.leaves += 1;
                    stats.occurrences += leaf.len();
                }
                None if !node.is_root() => stats.internal_nodes += 1,
                None => {}
            }
            stack.extend(node.children().map(|(_, child)| (child, depth)));
        }

        stats
    }
}

/// Print tree statistics in human-readable form
pub fn show_stats<W: Write>(stats: &TreeStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "Tree Statistics")?;
    writeln!(out, "===============")?;
    writeln!(out)?;
    writeln!(out, "Strings:          {}", stats.strings)?;
    writeln!(out, "Symbols:          {}", stats.symbols)?;
    writeln!(out, "Nodes:            {}", stats.nodes)?;
    writeln!(out, "  Internal:       {}", stats.internal_nodes)?;
    writeln!(out, "  Leaves:         {}", stats.leaves)?;
    writeln!(out, "Occurrences:      {}", stats.occurrences)?;
    writeln!(out, "Max depth:        {}", stats.max_depth)?;
    Ok(())
}
