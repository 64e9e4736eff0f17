//! Concepts: named nodes of the Fuzzy Cognitive Map.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named concept. Identity is the row/column label supplied by expert data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Concept(String);

impl Concept {
    /// Create a concept from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The concept label.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Concept {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Concept {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// An ordered (antecedent, consequent) concept pair.
///
/// Keys the per-pair diagnostic logs of a derivation run. The pair is
/// directed: `(A, B)` and `(B, A)` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptPair {
    /// The influencing concept.
    pub antecedent: Concept,
    /// The influenced concept.
    pub consequent: Concept,
}

impl ConceptPair {
    /// Create a directed pair.
    pub fn new(antecedent: impl Into<Concept>, consequent: impl Into<Concept>) -> Self {
        Self {
            antecedent: antecedent.into(),
            consequent: consequent.into(),
        }
    }
}

impl fmt::Display for ConceptPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.antecedent, self.consequent)
    }
}
