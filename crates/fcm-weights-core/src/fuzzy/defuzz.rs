//! Defuzzification: reducing an aggregated fuzzy set to one scalar weight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FcmError;
use crate::types::Universe;

/// Selectable defuzzification method.
///
/// An aggregated set that is entirely zero defuzzifies to 0.0 under every
/// method: no evidence, no influence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzMethod {
    /// Center of gravity of the aggregated set (default).
    #[default]
    Centroid,
    /// Position splitting the aggregated area in half.
    Bisector,
    /// Mean of the positions attaining the maximum degree.
    MeanOfMaximum,
    /// Smallest position attaining the maximum degree.
    SmallestOfMaximum,
    /// Largest position attaining the maximum degree.
    LargestOfMaximum,
}

impl DefuzzMethod {
    /// Canonical short name (the scikit-fuzzy spelling).
    pub fn as_str(&self) -> &'static str {
        match self {
            DefuzzMethod::Centroid => "centroid",
            DefuzzMethod::Bisector => "bisector",
            DefuzzMethod::MeanOfMaximum => "mom",
            DefuzzMethod::SmallestOfMaximum => "som",
            DefuzzMethod::LargestOfMaximum => "lom",
        }
    }

    /// All supported methods.
    pub fn all() -> [DefuzzMethod; 5] {
        [
            DefuzzMethod::Centroid,
            DefuzzMethod::Bisector,
            DefuzzMethod::MeanOfMaximum,
            DefuzzMethod::SmallestOfMaximum,
            DefuzzMethod::LargestOfMaximum,
        ]
    }
}

impl fmt::Display for DefuzzMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefuzzMethod {
    type Err = FcmError;

    /// Accepts the short scikit-fuzzy names and the spelled-out forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "centroid" => Ok(DefuzzMethod::Centroid),
            "bisector" => Ok(DefuzzMethod::Bisector),
            "mom" | "mean-of-maximum" | "mean_of_maximum" => Ok(DefuzzMethod::MeanOfMaximum),
            "som" | "smallest-of-maximum" | "smallest_of_maximum" => {
                Ok(DefuzzMethod::SmallestOfMaximum)
            }
            "lom" | "largest-of-maximum" | "largest_of_maximum" => {
                Ok(DefuzzMethod::LargestOfMaximum)
            }
            _ => Err(FcmError::UnsupportedMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Reduce an aggregated set to a single scalar on the universe.
///
/// The result is clamped to the universe bounds, so causal weights always
/// stay within [-1, 1]. An all-zero aggregate returns 0.0 for every method.
pub fn defuzzify(universe: &Universe, aggregated: &[f64], method: DefuzzMethod) -> f64 {
    let xs = universe.samples();
    debug_assert_eq!(xs.len(), aggregated.len());

    let value = match method {
        DefuzzMethod::Centroid => centroid(xs, aggregated),
        DefuzzMethod::Bisector => bisector(xs, aggregated),
        DefuzzMethod::MeanOfMaximum
        | DefuzzMethod::SmallestOfMaximum
        | DefuzzMethod::LargestOfMaximum => of_maximum(xs, aggregated, method),
    };
    value.clamp(universe.min(), universe.max())
}

fn centroid(xs: &[f64], degrees: &[f64]) -> f64 {
    let total: f64 = degrees.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let moment: f64 = xs.iter().zip(degrees).map(|(&x, &d)| x * d).sum();
    moment / total
}

fn bisector(xs: &[f64], degrees: &[f64]) -> f64 {
    let total: f64 = degrees.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let half = total / 2.0;
    let mut cumulative = 0.0;
    for (&x, &d) in xs.iter().zip(degrees) {
        cumulative += d;
        if cumulative >= half {
            return x;
        }
    }
    // Unreachable for total > 0; keep the last sample as a safe fallback.
    xs[xs.len() - 1]
}

fn of_maximum(xs: &[f64], degrees: &[f64], method: DefuzzMethod) -> f64 {
    let max = degrees.iter().fold(0.0_f64, |m, &d| m.max(d));
    if max <= 0.0 {
        return 0.0;
    }
    let mut first = None;
    let mut last = 0;
    let mut sum = 0.0;
    let mut count = 0usize;
    for (i, &d) in degrees.iter().enumerate() {
        if d == max {
            first.get_or_insert(i);
            last = i;
            sum += xs[i];
            count += 1;
        }
    }
    match method {
        DefuzzMethod::SmallestOfMaximum => xs[first.unwrap_or(0)],
        DefuzzMethod::LargestOfMaximum => xs[last],
        _ => sum / count as f64,
    }
}
