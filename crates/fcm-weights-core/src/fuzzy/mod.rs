//! The Mamdani inference chain: fuzzify → activate → aggregate → defuzzify.
//!
//! # Module Structure
//! - `membership`: triangular membership function synthesis over the universe
//! - `activation`: fuzzy AND activation and fuzzy OR aggregation
//! - `defuzz`: defuzzification methods reducing a set to one scalar

mod activation;
mod defuzz;
mod membership;

pub use self::activation::{activate, aggregate};
pub use self::defuzz::{defuzzify, DefuzzMethod};
pub use self::membership::{build_membership_functions, MembershipFamily, MembershipFunction};
