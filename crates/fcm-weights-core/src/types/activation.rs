//! Activation parameters: per-pair term frequencies.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::LinguisticTerm;

/// Term → frequency map for one ordered concept pair.
///
/// Each entry records what fraction of experts assigned that term to the
/// pair, a value in [0, 1]. Entries keep insertion order (the order terms
/// were first observed across the expert panel), so diagnostic output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActivationParameter(IndexMap<LinguisticTerm, f64>);

impl ActivationParameter {
    /// Empty parameter (no expert assigned any term).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a term's frequency.
    pub fn insert(&mut self, term: LinguisticTerm, frequency: f64) {
        self.0.insert(term, frequency);
    }

    /// Frequency recorded for a term, if any.
    pub fn get(&self, term: &LinguisticTerm) -> Option<f64> {
        self.0.get(term).copied()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no expert assigned any term to the pair.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every recorded frequency is zero.
    ///
    /// List-mode sign reconstruction can cancel a pair's frequencies to zero
    /// (mixed-sign panels); such pairs fire no rule.
    pub fn all_zero(&self) -> bool {
        self.0.values().all(|&f| f == 0.0)
    }

    /// Iterate terms and frequencies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&LinguisticTerm, f64)> {
        self.0.iter().map(|(term, &freq)| (term, freq))
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

impl FromIterator<(LinguisticTerm, f64)> for ActivationParameter {
    fn from_iter<I: IntoIterator<Item = (LinguisticTerm, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
