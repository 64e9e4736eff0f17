//! Centralized constants for the weight-derivation pipeline.
//!
//! Magic numbers from the derivation procedure live here so that the
//! universe bounds, the discretization step, and the default term set have a
//! single source of truth shared by configuration, membership synthesis, and
//! tests.

/// Universe-of-discourse constants.
///
/// Causal weights live on the closed interval [-1, 1]; the universe is that
/// interval uniformly discretized at [`DEFAULT_STEP`].
pub mod universe {
    /// Lower bound of the universe of discourse.
    pub const MIN: f64 = -1.0;

    /// Upper bound of the universe of discourse.
    pub const MAX: f64 = 1.0;

    /// Default discretization step (2001 samples over [-1, 1]).
    pub const DEFAULT_STEP: f64 = 0.001;

    /// Shared anchor for the two near-zero linguistic terms.
    ///
    /// The first positive term is anchored at `+ZERO_BAND` and the last
    /// negative term at `-ZERO_BAND`, so neither triangle crosses zero into
    /// the opposite sign's region.
    pub const ZERO_BAND: f64 = 0.001;
}

/// Default signed linguistic term set, most-negative first.
///
/// Ten terms: five negative mirrors followed by five positive terms, ordered
/// outward-in on the negative side and inward-out on the positive side. The
/// set must have even length; the two entries adjacent to zero (`-VL`, `VL`)
/// receive the truncated near-zero triangles.
pub const DEFAULT_LINGUISTIC_TERMS: [&str; 10] = [
    "-VH", "-H", "-M", "-L", "-VL", "VL", "L", "M", "H", "VH",
];
