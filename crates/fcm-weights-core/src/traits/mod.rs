//! Trait seams toward downstream consumers.
//!
//! Graph construction is an external collaborator: the core produces the
//! numeric weight matrix and downstream code turns it into whatever graph
//! representation it needs (one node per concept, one directed edge per
//! cell; whether zero-weight edges materialize is the consumer's call).

use crate::types::CausalWeightMatrix;

/// Builds a directed, weighted graph object from a causal weight matrix.
///
/// Implementors choose the graph representation and the zero-weight-edge
/// convention. The core never constructs graphs itself.
pub trait GraphMaterializer {
    /// The graph representation produced.
    type Graph;
    /// Materialization failure type.
    type Error;

    /// Turn the final weight matrix into a graph: one node per concept, one
    /// directed edge per matrix cell carrying that cell's weight.
    fn materialize(&self, weights: &CausalWeightMatrix) -> Result<Self::Graph, Self::Error>;
}

/// Default per-word length cap for display labels.
pub const DISPLAY_WORD_LEN: usize = 8;

/// Truncate a concept label for graph display.
///
/// Each whitespace-separated word longer than `max_word_len` is shortened
/// and marked with a trailing `.`; words are rejoined with newlines so long
/// multi-word labels stack instead of stretching a node.
pub fn display_label(label: &str, max_word_len: usize) -> String {
    label
        .split_whitespace()
        .map(|word| {
            if word.chars().count() > max_word_len {
                let short: String = word.chars().take(max_word_len).collect();
                format!("{short}.")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
