//! Triangular membership function synthesis.
//!
//! Given the universe and an ordered, signed, even-length term list, one
//! triangular membership function is synthesized per term: mirrored centers
//! on each side of zero, a shared half-width for all outer terms, and
//! specially truncated triangles for the two terms adjacent to zero so
//! neither crosses into the opposite sign's region.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::constants::universe::ZERO_BAND;
use crate::error::{FcmError, FcmResult};
use crate::types::{LinguisticTerm, Universe};

/// One triangular fuzzy set evaluated pointwise over the universe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipFunction {
    term: LinguisticTerm,
    center: f64,
    degrees: Vec<f64>,
}

impl MembershipFunction {
    /// The term this function belongs to.
    pub fn term(&self) -> &LinguisticTerm {
        &self.term
    }

    /// The triangle's apex position on the universe.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Membership degrees, one per universe sample, each in [0, 1].
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Index of the sample with the highest membership degree.
    pub fn peak_index(&self) -> usize {
        let mut best = 0;
        for (i, &d) in self.degrees.iter().enumerate() {
            if d > self.degrees[best] {
                best = i;
            }
        }
        best
    }
}

/// The full synthesized term → membership function family for one run.
///
/// Built once per derivation run from configuration alone, then shared
/// read-only by every pair computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MembershipFamily(IndexMap<LinguisticTerm, MembershipFunction>);

impl MembershipFamily {
    /// Look up the function for a term.
    pub fn get(&self, term: &LinguisticTerm) -> Option<&MembershipFunction> {
        self.0.get(term)
    }

    /// Number of terms in the family.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty family (never produced by the builder).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate terms and functions in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&LinguisticTerm, &MembershipFunction)> {
        self.0.iter()
    }

    /// The configured terms in order.
    pub fn terms(&self) -> impl Iterator<Item = &LinguisticTerm> {
        self.0.keys()
    }
}

/// `count` evenly spaced points from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            // Pin the endpoint exactly; the multiply can drift by an ulp.
            points[count - 1] = stop;
            points
        }
    }
}

/// Evaluate a triangle (left, apex, right) at `x`.
///
/// Degenerate sides (left == apex or apex == right) are vertical edges, not
/// divisions by zero: membership is 1.0 exactly at the apex and falls to 0
/// immediately on the degenerate side.
fn triangle(x: f64, left: f64, apex: f64, right: f64) -> f64 {
    if x == apex {
        return 1.0;
    }
    if x < left || x > right {
        return 0.0;
    }
    if x < apex {
        if apex > left {
            (x - left) / (apex - left)
        } else {
            0.0
        }
    } else if right > apex {
        (right - x) / (right - apex)
    } else {
        0.0
    }
}

/// Synthesize one triangular membership function per configured term.
///
/// Centers: the positive half gets `N/2` evenly spaced points in
/// `(0, max]` starting at the zero band, the negative half the mirror image
/// in `[min, 0)`. All terms share a common half-width except the two terms
/// adjacent to zero, which get asymmetric triangles anchored at `±0.001`
/// with their outer side reaching the next center outward (or the universe
/// bound when no such center exists, i.e. N = 2).
///
/// # Errors
///
/// - [`FcmError::MalformedTermSet`] for an empty, odd-length, or duplicated
///   term list.
/// - [`FcmError::DegenerateUniverse`] when the universe has fewer than 2
///   samples.
pub fn build_membership_functions(
    universe: &Universe,
    terms: &[LinguisticTerm],
) -> FcmResult<MembershipFamily> {
    let count = terms.len();
    if count == 0 {
        return Err(FcmError::MalformedTermSet {
            count,
            reason: "empty term list",
        });
    }
    if count % 2 != 0 {
        return Err(FcmError::MalformedTermSet {
            count,
            reason: "odd length",
        });
    }
    if universe.len() < 2 {
        return Err(FcmError::DegenerateUniverse {
            samples: universe.len(),
            step: universe.step(),
        });
    }

    let half = count / 2;
    let centers_pos = linspace(ZERO_BAND, universe.max(), half);
    let centers_neg = linspace(universe.min(), -ZERO_BAND, half);

    // Shared width for every term except the two adjacent to zero. For
    // N = 2 only the near-zero terms exist and the width is never used.
    let width = if half > 1 {
        (universe.range() / 2.0) / ((half as f64 - 1.0) / 2.0)
    } else {
        universe.range()
    };

    let mut triangles: Vec<(f64, f64, f64)> = centers_neg
        .iter()
        .chain(centers_pos.iter())
        .map(|&c| (c - width / 2.0, c, c + width / 2.0))
        .collect();

    // Near-zero overrides: anchored at the zero band, outer side reaching
    // the next center outward so the triangles never cross zero.
    let pos_outer = centers_pos.get(1).copied().unwrap_or(universe.max());
    let neg_outer = if half > 1 {
        centers_neg[half - 2]
    } else {
        universe.min()
    };
    triangles[half] = (ZERO_BAND, ZERO_BAND, pos_outer);
    triangles[half - 1] = (neg_outer, -ZERO_BAND, -ZERO_BAND);

    let mut family = IndexMap::with_capacity(count);
    for (term, (left, apex, right)) in terms.iter().zip(triangles) {
        let degrees = universe
            .samples()
            .iter()
            .map(|&x| triangle(x, left, apex, right))
            .collect();
        let function = MembershipFunction {
            term: term.clone(),
            center: apex,
            degrees,
        };
        if family.insert(term.clone(), function).is_some() {
            return Err(FcmError::MalformedTermSet {
                count,
                reason: "duplicate term label",
            });
        }
    }
    Ok(MembershipFamily(family))
}
