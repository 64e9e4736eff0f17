//! Error types for fcm-weights-core.
//!
//! A single [`FcmError`] enum covers every failure mode of the derivation
//! pipeline. All errors are detected before or during a single batch pass;
//! there are no transient failures and no retry semantics. On any error the
//! whole run aborts — partial matrices are never returned.

use thiserror::Error;

/// Errors raised by membership synthesis and the weight-derivation pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FcmError {
    /// The configured linguistic term set is invalid.
    ///
    /// The term list must have even, non-zero length (symmetric negative and
    /// positive halves) and no duplicate labels.
    #[error("Malformed linguistic term set: {reason} ({count} terms)")]
    MalformedTermSet {
        /// Number of terms supplied.
        count: usize,
        /// What was wrong with the set.
        reason: &'static str,
    },

    /// The universe of discourse has too few samples to carry a fuzzy set.
    ///
    /// Raised when the discretization step is non-positive, non-finite, or
    /// larger than the universe range.
    #[error("Degenerate universe: {samples} sample(s) at step {step}; at least 2 required")]
    DegenerateUniverse {
        /// Number of samples the step would produce.
        samples: usize,
        /// The offending step.
        step: f64,
    },

    /// An activation parameter references a term with no membership function.
    #[error("Unknown linguistic term {term:?}: no membership function was synthesized for it")]
    UnknownTerm {
        /// The unresolved term label.
        term: String,
    },

    /// Aggregation was invoked with no activated sets.
    ///
    /// Internal invariant violation: callers must skip pairs for which no
    /// rule fired ("no evidence, weight stays 0") instead of aggregating an
    /// empty collection.
    #[error("Empty activation: no membership function was activated for this pair")]
    EmptyActivation,

    /// An unrecognized defuzzification method name was supplied.
    #[error("Unsupported defuzzification method {name:?}")]
    UnsupportedMethod {
        /// The unrecognized method name.
        name: String,
    },
}

/// Result alias used throughout the crate.
pub type FcmResult<T> = Result<T, FcmError>;
