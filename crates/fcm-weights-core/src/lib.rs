//! FCM Causal Weight Derivation
//!
//! Converts qualitative, linguistic judgments from multiple experts about
//! causal influence between named concepts ("A influences B as High") into a
//! single numeric weight per ordered concept pair, for use as edge weights in
//! a Fuzzy Cognitive Map. The inference is Mamdani-style: fuzzify →
//! activate → aggregate → defuzzify.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types ([`types::Universe`], [`types::LinguisticTerm`],
//!   [`types::CausalWeightMatrix`], ...)
//! - The inference chain ([`fuzzy::build_membership_functions`],
//!   [`fuzzy::activate`], [`fuzzy::aggregate`], [`fuzzy::defuzzify`])
//! - The orchestrator ([`weights::WeightMatrixBuilder`]) with its two
//!   multi-expert ingestion modes, "matrix" and "list"
//! - Error types and result aliases
//! - The [`traits::GraphMaterializer`] seam toward downstream graph
//!   construction
//!
//! Spreadsheet parsing, schema validation, graph-object construction, and
//! plotting are external collaborators. The core assumes validated input and
//! produces the numeric matrix plus diagnostic intermediates.
//!
//! # Example
//!
//! ```
//! use fcm_weights_core::{Concept, ExpertMatrix, WeightMatrixBuilder};
//!
//! let concepts = vec![Concept::new("A"), Concept::new("B")];
//! let experts = vec![
//!     ExpertMatrix::empty(concepts.clone()).with_assignment("A", "B", "H"),
//!     ExpertMatrix::empty(concepts.clone()).with_assignment("A", "B", "VH"),
//! ];
//!
//! let derivation = WeightMatrixBuilder::with_defaults()
//!     .from_matrix_survey(&experts)
//!     .unwrap();
//! let weight = derivation
//!     .weights
//!     .weight(&Concept::new("A"), &Concept::new("B"));
//! assert!(weight > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod traits;
pub mod types;
pub mod weights;

// Re-exports for convenience
pub use config::FcmConfig;
pub use error::{FcmError, FcmResult};
pub use fuzzy::{
    activate, aggregate, build_membership_functions, defuzzify, DefuzzMethod, MembershipFamily,
    MembershipFunction,
};
pub use traits::GraphMaterializer;
pub use types::{
    ActivationParameter, AggregatedSet, CausalWeightMatrix, Concept, ConceptPair,
    ExpertListSurvey, ExpertMatrix, LinguisticTerm, ListJudgment, Universe,
};
pub use weights::{WeightDerivation, WeightMatrixBuilder};
