//! Universe of discourse: the discretized causal-weight range.

use serde::Serialize;

use crate::config::constants::universe as bounds;
use crate::error::{FcmError, FcmResult};

/// Immutable, uniformly discretized universe of discourse over [-1, 1].
///
/// Every fuzzy set in a run is an array of membership degrees with one entry
/// per universe sample. The universe is constructed once per derivation run
/// and shared read-only by all pair computations.
///
/// Samples are computed as `MIN + i * step` rather than by repeated addition,
/// so the grid carries no accumulated floating-point drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Universe {
    samples: Vec<f64>,
    step: f64,
}

impl Universe {
    /// Build a universe over [-1, 1] at the given step.
    ///
    /// # Errors
    ///
    /// [`FcmError::DegenerateUniverse`] when the step is non-positive,
    /// non-finite, or so large that fewer than 2 samples fit the range.
    pub fn new(step: f64) -> FcmResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(FcmError::DegenerateUniverse { samples: 0, step });
        }
        let range = bounds::MAX - bounds::MIN;
        // Tolerate steps that divide the range only up to float noise.
        let intervals = (range / step + 1e-9).floor() as usize;
        let count = intervals + 1;
        if count < 2 {
            return Err(FcmError::DegenerateUniverse {
                samples: count,
                step,
            });
        }
        let samples = (0..count)
            .map(|i| bounds::MIN + i as f64 * step)
            .collect();
        Ok(Self { samples, step })
    }

    /// Universe with the default step (0.001; 2001 samples).
    pub fn with_default_step() -> Self {
        // The default step is a compile-time constant known to be valid.
        match Self::new(bounds::DEFAULT_STEP) {
            Ok(universe) => universe,
            Err(_) => unreachable!("default universe step is valid"),
        }
    }

    /// The ordered sample grid.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the universe holds no samples (never, post-construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Discretization step.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Lower bound of the universe.
    #[inline]
    pub fn min(&self) -> f64 {
        bounds::MIN
    }

    /// Upper bound of the universe.
    #[inline]
    pub fn max(&self) -> f64 {
        bounds::MAX
    }

    /// Width of the universe (`max - min`).
    #[inline]
    pub fn range(&self) -> f64 {
        bounds::MAX - bounds::MIN
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::with_default_step()
    }
}
