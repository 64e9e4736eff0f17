//! Linguistic terms: named, optionally sign-prefixed causal-strength labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A linguistic term naming one triangular fuzzy set (e.g. `"H"`, `"-VH"`).
///
/// A leading `-` marks the negative half of the term set. Terms are compared
/// and hashed by their full label, sign included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinguisticTerm(String);

impl LinguisticTerm {
    /// Create a term from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The full label, sign prefix included.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the label carries a `-` sign prefix.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// The label with any sign prefix stripped.
    #[inline]
    pub fn base(&self) -> &str {
        self.0.strip_prefix('-').unwrap_or(&self.0)
    }

    /// Re-attach a sign to this term from a signed numeric value.
    ///
    /// Used by the list-mode sign reconstruction: a base term whose pair
    /// trends negative becomes its `-`-prefixed counterpart. Non-negative
    /// values leave the label untouched.
    pub fn with_sign(&self, value: f64) -> LinguisticTerm {
        if value < 0.0 && !self.is_negative() {
            LinguisticTerm(format!("-{}", self.0))
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for LinguisticTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinguisticTerm {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for LinguisticTerm {
    fn from(label: String) -> Self {
        Self(label)
    }
}
