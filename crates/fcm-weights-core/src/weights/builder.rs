//! Weight matrix derivation across every ordered concept pair.
//!
//! Two ingestion modes share the activate → aggregate → defuzzify core:
//! mode "matrix" (per-expert square linguistic tables) and mode "list"
//! (per-expert edge lists with signed numeric codes). Both produce a
//! [`WeightDerivation`]: the causal weight matrix plus per-pair diagnostic
//! logs.
//!
//! Pair computations depend only on the shared read-only universe and
//! membership family plus that pair's own slice of the expert data, so they
//! are dispatched to a rayon pool. Pairs are enumerated in a fixed order and
//! outcomes collected in that order before a single-threaded matrix fill,
//! keeping the run deterministic.

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;

use crate::config::FcmConfig;
use crate::error::FcmResult;
use crate::fuzzy::{
    activate, aggregate, build_membership_functions, defuzzify, MembershipFamily,
};
use crate::types::{
    ActivationParameter, AggregatedSet, CausalWeightMatrix, Concept, ConceptPair,
    ExpertListSurvey, ExpertMatrix, LinguisticTerm, ListJudgment, Universe,
};

use super::derivation::WeightDerivation;

/// Outcome of one pair's computation, before the matrix fill.
struct PairOutcome {
    parameter: ActivationParameter,
    /// Aggregated set and defuzzified weight, when at least one rule fired.
    fired: Option<(AggregatedSet, f64)>,
}

/// Orchestrates tally → activate → aggregate → defuzzify for every ordered
/// concept pair of an expert panel.
#[derive(Debug, Clone)]
pub struct WeightMatrixBuilder {
    config: FcmConfig,
}

impl Default for WeightMatrixBuilder {
    fn default() -> Self {
        Self::new(FcmConfig::default())
    }
}

impl WeightMatrixBuilder {
    /// Builder with the given configuration.
    pub fn new(config: FcmConfig) -> Self {
        Self { config }
    }

    /// Builder with the default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The configuration this builder runs with.
    pub fn config(&self) -> &FcmConfig {
        &self.config
    }

    /// Universe and membership family for this run. Both depend only on
    /// configuration and are shared read-only across all pairs.
    fn prepare(&self) -> FcmResult<(Universe, MembershipFamily)> {
        let universe = Universe::new(self.config.universe_step)?;
        let membership = build_membership_functions(&universe, &self.config.linguistic_terms)?;
        Ok((universe, membership))
    }

    /// Derive the causal weight matrix from mode "matrix" input.
    ///
    /// The concept index is the ordered union of concepts observed across
    /// all expert tables. For each ordered pair the per-term assignment
    /// counts are divided by the total expert count; an empty tally leaves
    /// the cell at 0 and records no diagnostics.
    pub fn from_matrix_survey(&self, experts: &[ExpertMatrix]) -> FcmResult<WeightDerivation> {
        let (universe, membership) = self.prepare()?;
        let expert_count = experts.len();

        let mut concepts: IndexSet<Concept> = IndexSet::new();
        for expert in experts {
            for concept in expert.concepts() {
                concepts.insert(concept.clone());
            }
        }

        let pairs: Vec<ConceptPair> = concepts
            .iter()
            .flat_map(|antecedent| {
                concepts
                    .iter()
                    .map(move |consequent| ConceptPair::new(antecedent.clone(), consequent.clone()))
            })
            .collect();

        let outcomes: Vec<Option<PairOutcome>> = pairs
            .par_iter()
            .map(|pair| {
                let parameter =
                    tally_matrix(experts, &pair.antecedent, &pair.consequent, expert_count);
                if parameter.is_empty() {
                    return Ok(None);
                }
                let activated = activate(&parameter, &membership)?;
                let union = aggregate(&activated)?;
                let value = defuzzify(&universe, &union, self.config.method);
                Ok(Some(PairOutcome {
                    parameter,
                    fired: Some((union, value)),
                }))
            })
            .collect::<FcmResult<_>>()?;

        let mut weights = CausalWeightMatrix::zeroed(concepts);
        let mut activation_log = IndexMap::new();
        let mut aggregated_log = IndexMap::new();
        for (pair, outcome) in pairs.into_iter().zip(outcomes) {
            let Some(outcome) = outcome else { continue };
            if let Some((union, value)) = outcome.fired {
                weights.set(&pair.antecedent, &pair.consequent, value);
                aggregated_log.insert(pair.clone(), union);
            }
            activation_log.insert(pair, outcome.parameter);
        }

        tracing::debug!(
            mode = "matrix",
            experts = expert_count,
            concepts = weights.dim(),
            pairs_fired = aggregated_log.len(),
            method = %self.config.method,
            "derived causal weight matrix"
        );

        Ok(WeightDerivation {
            weights,
            universe,
            membership,
            activation_log,
            aggregated_log,
        })
    }

    /// Derive the causal weight matrix from mode "list" input.
    ///
    /// Judgments are grouped by (From, To) in first-appearance order. Each
    /// term's frequency (count / expert count) is multiplied by the pair's
    /// mean raw signed code, re-attaching polarity; the sign moves into the
    /// term label and the magnitude becomes the activation weight.
    ///
    /// Known approximation, preserved from the procedure this implements:
    /// pair polarity is the *mean* of the raw codes, which is not a complete
    /// rule for mixed-sign or tied panels — a perfectly split panel cancels
    /// to zero magnitude and fires no rule.
    ///
    /// The matrix is indexed by the distinct `From` concepts; a judgment
    /// whose `To` never occurs as a `From` has no column and is skipped with
    /// a warning.
    pub fn from_list_survey(&self, experts: &[ExpertListSurvey]) -> FcmResult<WeightDerivation> {
        let (universe, membership) = self.prepare()?;
        let expert_count = experts.len();

        let mut groups: IndexMap<ConceptPair, Vec<&ListJudgment>> = IndexMap::new();
        let mut antecedents: IndexSet<Concept> = IndexSet::new();
        for expert in experts {
            for judgment in &expert.judgments {
                antecedents.insert(judgment.from.clone());
                groups
                    .entry(ConceptPair::new(judgment.from.clone(), judgment.to.clone()))
                    .or_default()
                    .push(judgment);
            }
        }

        let entries: Vec<(&ConceptPair, &Vec<&ListJudgment>)> = groups.iter().collect();
        let outcomes: Vec<PairOutcome> = entries
            .par_iter()
            .map(|(_, rows)| {
                self.reconstruct_pair(rows.as_slice(), expert_count, &universe, &membership)
            })
            .collect::<FcmResult<_>>()?;

        let mut weights = CausalWeightMatrix::zeroed(antecedents);
        let mut activation_log = IndexMap::new();
        let mut aggregated_log = IndexMap::new();
        for ((pair, _), outcome) in groups.iter().zip(outcomes) {
            activation_log.insert(pair.clone(), outcome.parameter);
            let Some((union, value)) = outcome.fired else {
                continue;
            };
            if weights.set(&pair.antecedent, &pair.consequent, value) {
                aggregated_log.insert(pair.clone(), union);
            } else {
                tracing::warn!(
                    antecedent = %pair.antecedent,
                    consequent = %pair.consequent,
                    "consequent never occurs as an antecedent; weight has no cell and is dropped"
                );
            }
        }

        tracing::debug!(
            mode = "list",
            experts = expert_count,
            concepts = weights.dim(),
            pairs_fired = aggregated_log.len(),
            method = %self.config.method,
            "derived causal weight matrix"
        );

        Ok(WeightDerivation {
            weights,
            universe,
            membership,
            activation_log,
            aggregated_log,
        })
    }

    /// Sign reconstruction and inference for one (From, To) group.
    fn reconstruct_pair(
        &self,
        rows: &[&ListJudgment],
        expert_count: usize,
        universe: &Universe,
        membership: &MembershipFamily,
    ) -> FcmResult<PairOutcome> {
        let mean = rows.iter().map(|j| j.code).sum::<f64>() / rows.len() as f64;

        let mut counts: IndexMap<LinguisticTerm, usize> = IndexMap::new();
        for judgment in rows {
            *counts.entry(judgment.term.clone()).or_insert(0) += 1;
        }

        let mut parameter = ActivationParameter::new();
        for (term, count) in counts {
            let frequency = count as f64 / expert_count as f64;
            let signed = frequency * mean;
            parameter.insert(term.with_sign(signed), signed.abs());
        }

        if parameter.all_zero() {
            return Ok(PairOutcome {
                parameter,
                fired: None,
            });
        }
        let activated = activate(&parameter, membership)?;
        let union = aggregate(&activated)?;
        let value = defuzzify(universe, &union, self.config.method);
        Ok(PairOutcome {
            parameter,
            fired: Some((union, value)),
        })
    }
}

/// Per-term assignment frequencies for one ordered pair across the panel.
fn tally_matrix(
    experts: &[ExpertMatrix],
    antecedent: &Concept,
    consequent: &Concept,
    expert_count: usize,
) -> ActivationParameter {
    let mut counts: IndexMap<LinguisticTerm, usize> = IndexMap::new();
    for expert in experts {
        if let Some(term) = expert.term_for(antecedent, consequent) {
            *counts.entry(term.clone()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / expert_count as f64))
        .collect()
}
