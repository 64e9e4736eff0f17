//! Run-scoped outputs of a weight derivation.

use indexmap::IndexMap;

use crate::fuzzy::MembershipFamily;
use crate::types::{
    ActivationParameter, AggregatedSet, CausalWeightMatrix, Concept, ConceptPair, Universe,
};

/// Everything one derivation run produces.
///
/// The universe and membership family depend only on configuration and are
/// included so downstream diagnostics (frequency histograms, aggregated-set
/// plots) can be rendered without re-deriving them. All fields are written
/// exactly once during the batch pass; nothing here outlives the run as
/// hidden shared state.
#[derive(Debug, Clone)]
pub struct WeightDerivation {
    /// The final causal weight matrix (antecedent = row).
    pub weights: CausalWeightMatrix,
    /// The universe the run was computed over.
    pub universe: Universe,
    /// The synthesized membership functions, per configured term.
    pub membership: MembershipFamily,
    /// Per-pair term frequencies, for pairs with at least one response.
    pub activation_log: IndexMap<ConceptPair, ActivationParameter>,
    /// Per-pair aggregated fuzzy sets, for pairs where a rule fired.
    pub aggregated_log: IndexMap<ConceptPair, AggregatedSet>,
}

impl WeightDerivation {
    /// Activation parameter recorded for a pair, if any.
    pub fn activation_for(&self, antecedent: &Concept, consequent: &Concept) -> Option<&ActivationParameter> {
        self.activation_log
            .get(&ConceptPair::new(antecedent.clone(), consequent.clone()))
    }

    /// Aggregated set recorded for a pair, if a rule fired for it.
    pub fn aggregated_for(&self, antecedent: &Concept, consequent: &Concept) -> Option<&AggregatedSet> {
        self.aggregated_log
            .get(&ConceptPair::new(antecedent.clone(), consequent.clone()))
    }

    /// Number of pairs for which at least one rule fired.
    pub fn fired_pairs(&self) -> usize {
        self.aggregated_log.len()
    }
}
