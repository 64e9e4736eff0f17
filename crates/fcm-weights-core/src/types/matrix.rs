//! The causal weight matrix: the final output of a derivation run.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::Concept;

/// Square, concept-indexed matrix of causal weights in [-1, 1].
///
/// Orientation: **antecedent = row, consequent = column**. `get(a, b)` reads
/// the influence of `a` on `b`. Cells never written stay at 0.0 ("no
/// evidence, no influence"), the diagonal included.
///
/// Concepts keep their first-appearance order from the expert data, so the
/// matrix round-trips deterministically through serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CausalWeightMatrix {
    index: IndexMap<Concept, usize>,
    values: Vec<f64>,
}

impl CausalWeightMatrix {
    /// All-zero matrix over the given concepts (duplicates collapse,
    /// first-appearance order kept).
    pub fn zeroed(concepts: impl IntoIterator<Item = Concept>) -> Self {
        let mut index = IndexMap::new();
        for concept in concepts {
            let next = index.len();
            index.entry(concept).or_insert(next);
        }
        let dim = index.len();
        Self {
            index,
            values: vec![0.0; dim * dim],
        }
    }

    /// Number of concepts (matrix is `dim × dim`).
    #[inline]
    pub fn dim(&self) -> usize {
        self.index.len()
    }

    /// True for the empty (0 × 0) matrix.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Concepts in row/column order.
    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.index.keys()
    }

    /// Whether the concept indexes a row/column.
    pub fn contains(&self, concept: &Concept) -> bool {
        self.index.contains_key(concept)
    }

    /// Weight of the directed edge antecedent → consequent, if both concepts
    /// are indexed.
    pub fn get(&self, antecedent: &Concept, consequent: &Concept) -> Option<f64> {
        let row = *self.index.get(antecedent)?;
        let col = *self.index.get(consequent)?;
        Some(self.values[row * self.dim() + col])
    }

    /// Weight of the directed edge, 0.0 when either concept is unknown.
    pub fn weight(&self, antecedent: &Concept, consequent: &Concept) -> f64 {
        self.get(antecedent, consequent).unwrap_or(0.0)
    }

    /// Write a cell. Returns `false` (and writes nothing) when either
    /// concept is not indexed.
    pub fn set(&mut self, antecedent: &Concept, consequent: &Concept, value: f64) -> bool {
        let dim = self.dim();
        let (Some(&row), Some(&col)) = (self.index.get(antecedent), self.index.get(consequent))
        else {
            return false;
        };
        self.values[row * dim + col] = value;
        true
    }

    /// One antecedent's full row of weights, in concept order.
    pub fn row(&self, antecedent: &Concept) -> Option<&[f64]> {
        let row = *self.index.get(antecedent)?;
        let dim = self.dim();
        Some(&self.values[row * dim..(row + 1) * dim])
    }

    /// Iterate every cell as (antecedent, consequent, weight).
    pub fn iter(&self) -> impl Iterator<Item = (&Concept, &Concept, f64)> {
        self.index.keys().enumerate().flat_map(move |(r, ant)| {
            self.index
                .keys()
                .enumerate()
                .map(move |(c, cons)| (ant, cons, self.values[r * self.dim() + c]))
        })
    }
}
