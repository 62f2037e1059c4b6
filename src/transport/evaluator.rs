//! Transport Profile Evaluator
//!
//! Closed-form analytical solution of the one-dimensional
//! advection-dispersion-reaction equation (ADRE) for a semi-infinite column
//! with a constant-concentration inlet:
//!
//! ```text
//! c(x, t) / c0 = 1                                               x ≤ 0
//! c(x, t) / c0 = ½ · erfc((x − v·t) / √(4·D·t)) · exp(−k·x / v)  x > 0
//! ```
//!
//! with pore velocity `v = q / (3.6e9 · n · π·r²)` (flow rate q in mL/h).
//!
//! # Purity
//!
//! Evaluation is a pure function of the parameters and the sample grid: no
//! side effects, deterministic, total over the validated domain. Parameter
//! validation happens once at the entry point; the per-sample formula then
//! never divides by zero or takes a negative square root.
//!
//! # Single authoritative formula
//!
//! This evaluator is the only place the solution is written down. The initial
//! server-side render calls it natively; the interactive page's recompute
//! script is generated from the same constants
//! ([`UPSTREAM_FRACTION`](crate::physics::UPSTREAM_FRACTION),
//! [`ML_PER_HOUR_PER_M3_PER_S`](crate::physics::ML_PER_HOUR_PER_M3_PER_S))
//! and the same erfc coefficient table, so the two paths cannot drift.
//!
//! # Example
//!
//! ```rust
//! use adre_rs::physics::ColumnParameters;
//! use adre_rs::transport::TransportEvaluator;
//!
//! let evaluator = TransportEvaluator::new();
//! let profile = evaluator.evaluate(&ColumnParameters::default()).unwrap();
//!
//! // Inlet boundary: c = 1 at and upstream of x = 0
//! assert_eq!(profile.concentrations()[0], 1.0);
//! // Breakthrough front has not reached the outlet yet
//! assert!(profile.outlet_concentration() < 1e-6);
//! ```

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::physics::special::erfc;
use crate::physics::{ColumnParameters, UPSTREAM_FRACTION};
use crate::transport::TransportProfile;

/// Injected (inlet) concentration everything is normalized to
pub const C0: f64 = 1.0;

// =================================================================================================
// Evaluator
// =================================================================================================

/// Evaluates the analytical ADRE solution on a fixed sample grid
///
/// The grid spans `[-0.02·L, L)`: 2% of the column length upstream of the
/// inlet for visual context, then the column itself, sampled uniformly.
#[derive(Debug, Clone, Copy)]
pub struct TransportEvaluator {
    samples: usize,
}

impl Default for TransportEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportEvaluator {
    /// Reference grid resolution (matches the original 1e-4 m spacing on a
    /// 0.2 m column)
    pub const DEFAULT_SAMPLES: usize = 2040;

    /// Coarsest grid that still renders smoothly
    pub const MIN_SAMPLES: usize = 2;

    /// Create an evaluator with the reference grid resolution
    pub fn new() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
        }
    }

    /// Create an evaluator with a custom grid resolution
    ///
    /// Anything ≥ 500 renders smoothly; the floor of 2 only guards against a
    /// degenerate grid.
    pub fn with_samples(samples: usize) -> Self {
        Self {
            samples: samples.max(Self::MIN_SAMPLES),
        }
    }

    /// Grid resolution of this evaluator
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sample positions for a column of the given length \[m\]
    ///
    /// `x_j = -0.02·L + 1.02·L/N · j` for `j = 0..N`: starts exactly at
    /// `-0.02·L`, ends one spacing short of `L`. Strictly increasing for any
    /// positive length.
    pub fn sample_positions(&self, length: f64) -> DVector<f64> {
        let n = self.samples as f64;
        DVector::from_fn(self.samples, |j, _| {
            -UPSTREAM_FRACTION * length + (1.0 + UPSTREAM_FRACTION) * length / n * j as f64
        })
    }

    /// Concentration at a single position \[-\]
    ///
    /// Assumes `parameters` already validated; see
    /// [`ColumnParameters::validate`]. At and upstream of the inlet the
    /// boundary condition pins the value to exactly 1.
    pub fn concentration_at(&self, parameters: &ColumnParameters, position: f64) -> f64 {
        if position <= 0.0 {
            return C0;
        }

        let v = parameters.pore_velocity();
        let spreading = (4.0 * parameters.dispersion * parameters.time).sqrt();
        let front = (position - v * parameters.time) / spreading;
        let attenuation = (-parameters.reaction * position / v).exp();

        C0 / 2.0 * erfc(front) * attenuation
    }

    /// Evaluate the full profile for a parameter set
    ///
    /// # Errors
    ///
    /// Returns the validation message when any parameter is outside its
    /// documented domain (the formula would otherwise produce NaN).
    pub fn evaluate(&self, parameters: &ColumnParameters) -> Result<TransportProfile, String> {
        parameters.validate()?;

        let positions = self.sample_positions(parameters.length);
        let concentrations = self.map_positions(parameters, &positions);

        TransportProfile::new(positions, concentrations)
    }

    /// Evaluate concentrations on a caller-supplied grid
    ///
    /// Same contract as [`evaluate`](Self::evaluate) but with explicit
    /// positions, for callers that manage their own grid.
    pub fn evaluate_at(
        &self,
        parameters: &ColumnParameters,
        positions: &DVector<f64>,
    ) -> Result<DVector<f64>, String> {
        parameters.validate()?;
        Ok(self.map_positions(parameters, positions))
    }

    /// Map the formula over a grid, in parallel for large grids
    fn map_positions(
        &self,
        parameters: &ColumnParameters,
        positions: &DVector<f64>,
    ) -> DVector<f64> {
        // Threshold mirrors PhysicalData::apply: below ~1000 elements the
        // rayon dispatch overhead outweighs the work.
        #[cfg(feature = "parallel")]
        if positions.len() > 999 {
            let values: Vec<f64> = positions
                .as_slice()
                .par_iter()
                .map(|&x| self.concentration_at(parameters, x))
                .collect();
            return DVector::from_vec(values);
        }

        positions.map(|x| self.concentration_at(parameters, x))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
