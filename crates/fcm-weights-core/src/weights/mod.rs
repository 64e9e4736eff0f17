//! Causal weight matrix derivation.
//!
//! # Module Structure
//! - `builder`: the two ingestion modes and the per-pair pipeline
//! - `derivation`: run-scoped outputs (matrix + diagnostic logs)

mod builder;
mod derivation;

#[cfg(test)]
mod tests_list_mode;
#[cfg(test)]
mod tests_matrix_mode;

pub use self::builder::WeightMatrixBuilder;
pub use self::derivation::WeightDerivation;
