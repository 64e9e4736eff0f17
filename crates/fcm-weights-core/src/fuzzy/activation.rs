//! Activation (fuzzy AND) and aggregation (fuzzy OR).

use indexmap::IndexMap;

use crate::error::{FcmError, FcmResult};
use crate::types::{ActivationParameter, AggregatedSet, LinguisticTerm};

use super::membership::MembershipFamily;

/// Clip each referenced membership function by its activation weight.
///
/// For every term in `input`, the result holds the elementwise minimum of
/// the term's frequency and its membership degrees (fuzzy implication by
/// clipping). Terms in the family that `input` does not mention contribute
/// nothing and are absent from the result.
///
/// # Errors
///
/// [`FcmError::UnknownTerm`] when `input` references a term the family has
/// no membership function for.
pub fn activate(
    input: &ActivationParameter,
    family: &MembershipFamily,
) -> FcmResult<IndexMap<LinguisticTerm, AggregatedSet>> {
    let mut activated = IndexMap::with_capacity(input.len());
    for (term, frequency) in input.iter() {
        let function = family.get(term).ok_or_else(|| FcmError::UnknownTerm {
            term: term.as_str().to_string(),
        })?;
        let clipped = function
            .degrees()
            .iter()
            .map(|&degree| degree.min(frequency))
            .collect();
        activated.insert(term.clone(), clipped);
    }
    Ok(activated)
}

/// Elementwise fuzzy union (maximum) of all activated sets for one pair.
///
/// Commutative, associative, idempotent.
///
/// # Errors
///
/// [`FcmError::EmptyActivation`] when no set was activated. Callers must
/// treat an empty tally as "skip, weight stays 0" instead of aggregating.
pub fn aggregate(activated: &IndexMap<LinguisticTerm, AggregatedSet>) -> FcmResult<AggregatedSet> {
    let mut sets = activated.values();
    let first = sets.next().ok_or(FcmError::EmptyActivation)?;
    let mut union = first.clone();
    for set in sets {
        for (u, &degree) in union.iter_mut().zip(set.iter()) {
            if degree > *u {
                *u = degree;
            }
        }
    }
    Ok(union)
}
