//! Derivation-run configuration.

pub mod constants;

use serde::{Deserialize, Serialize};

use crate::fuzzy::DefuzzMethod;
use crate::types::LinguisticTerm;

use self::constants::{universe, DEFAULT_LINGUISTIC_TERMS};

fn default_terms() -> Vec<LinguisticTerm> {
    DEFAULT_LINGUISTIC_TERMS
        .iter()
        .map(|&label| LinguisticTerm::new(label))
        .collect()
}

fn default_step() -> f64 {
    universe::DEFAULT_STEP
}

/// Configuration for one weight-derivation run.
///
/// Every instance owns its own copy of the term list; the default set is a
/// shared immutable constant copied per call, so no run can mutate another's
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcmConfig {
    /// Ordered, signed, even-length linguistic term set.
    #[serde(default = "default_terms")]
    pub linguistic_terms: Vec<LinguisticTerm>,

    /// Defuzzification method.
    #[serde(default)]
    pub method: DefuzzMethod,

    /// Universe discretization step.
    #[serde(default = "default_step")]
    pub universe_step: f64,
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            linguistic_terms: default_terms(),
            method: DefuzzMethod::default(),
            universe_step: default_step(),
        }
    }
}

impl FcmConfig {
    /// Default configuration (10-term set, centroid, step 0.001).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the term set.
    pub fn with_terms(mut self, terms: impl IntoIterator<Item = LinguisticTerm>) -> Self {
        self.linguistic_terms = terms.into_iter().collect();
        self
    }

    /// Replace the defuzzification method.
    pub fn with_method(mut self, method: DefuzzMethod) -> Self {
        self.method = method;
        self
    }

    /// Replace the universe step.
    pub fn with_universe_step(mut self, step: f64) -> Self {
        self.universe_step = step;
        self
    }
}
