//! Domain types shared by the derivation pipeline.
//!
//! # Module Structure
//! - `universe`: the discretized [-1, 1] universe of discourse
//! - `term`: linguistic term labels with sign handling
//! - `concept`: concept and directed concept-pair identities
//! - `activation`: per-pair term → frequency activation parameters
//! - `survey`: validated per-expert inputs for both ingestion modes
//! - `matrix`: the final causal weight matrix

mod activation;
mod concept;
mod matrix;
mod survey;
mod term;
mod universe;

pub use self::activation::ActivationParameter;
pub use self::concept::{Concept, ConceptPair};
pub use self::matrix::CausalWeightMatrix;
pub use self::survey::{ExpertListSurvey, ExpertMatrix, ListJudgment};
pub use self::term::LinguisticTerm;
pub use self::universe::Universe;

/// One aggregated fuzzy set: a membership degree per universe sample.
pub type AggregatedSet = Vec<f64>;
