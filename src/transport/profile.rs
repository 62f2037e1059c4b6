//! Concentration profile along the column axis
//!
//! A [`TransportProfile`] is an ordered sequence of
//! `(position, normalized concentration)` pairs produced by the
//! [`TransportEvaluator`](crate::transport::TransportEvaluator). Positions run
//! from slightly upstream of the column inlet (so the constant boundary is
//! visible) to the outlet; concentrations are normalized to the injected
//! concentration c0 = 1.

use nalgebra::DVector;
use std::fmt;

/// Ordered `(position, concentration)` pairs along the column axis
///
/// # Invariants
///
/// - `positions` and `concentrations` have the same length
/// - positions are strictly increasing
/// - `concentrations[i] == 1` wherever `positions[i] <= 0` (inlet boundary)
///
/// # Example
///
/// ```rust
/// use adre_rs::physics::ColumnParameters;
/// use adre_rs::transport::TransportEvaluator;
///
/// let profile = TransportEvaluator::new()
///     .evaluate(&ColumnParameters::default())
///     .unwrap();
///
/// assert_eq!(profile.len(), TransportEvaluator::DEFAULT_SAMPLES);
/// assert_eq!(profile.concentrations()[0], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransportProfile {
    positions: DVector<f64>,
    concentrations: DVector<f64>,
}

impl TransportProfile {
    /// Create a profile from matching position and concentration vectors
    ///
    /// # Errors
    ///
    /// Returns an error when the vectors are empty or their lengths differ.
    pub fn new(positions: DVector<f64>, concentrations: DVector<f64>) -> Result<Self, String> {
        if positions.is_empty() || concentrations.is_empty() {
            return Err("Empty data: positions and concentrations must not be empty".to_string());
        }
        if positions.len() != concentrations.len() {
            return Err(format!(
                "Data length mismatch: {} positions versus {} concentrations",
                positions.len(),
                concentrations.len()
            ));
        }
        Ok(Self {
            positions,
            concentrations,
        })
    }

    /// Number of sample points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the profile holds no samples
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sample positions \[m\]
    pub fn positions(&self) -> &DVector<f64> {
        &self.positions
    }

    /// Normalized concentrations \[-\]
    pub fn concentrations(&self) -> &DVector<f64> {
        &self.concentrations
    }

    /// Single `(position, concentration)` pair
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        if index < self.len() {
            Some((self.positions[index], self.concentrations[index]))
        } else {
            None
        }
    }

    /// Iterate over `(position, concentration)` pairs in axis order
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.concentrations.iter().copied())
    }

    /// Positions as a plain `Vec` (for serialization into the page)
    pub fn positions_vec(&self) -> Vec<f64> {
        self.positions.iter().copied().collect()
    }

    /// Concentrations as a plain `Vec` (for serialization into the page)
    pub fn concentrations_vec(&self) -> Vec<f64> {
        self.concentrations.iter().copied().collect()
    }

    /// Concentration at the column outlet (last sample)
    pub fn outlet_concentration(&self) -> f64 {
        self.concentrations[self.len() - 1]
    }

    /// Largest concentration in the profile
    pub fn max_concentration(&self) -> f64 {
        self.concentrations
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl fmt::Display for TransportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profile [{} samples, x ∈ [{:.4}, {:.4}] m, outlet c = {:.3e}]",
            self.len(),
            self.positions[0],
            self.positions[self.len() - 1],
            self.outlet_concentration()
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        let empty = DVector::from_vec(vec![]);
        let one = DVector::from_vec(vec![1.0]);
        assert!(TransportProfile::new(empty, one).is_err());
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let positions = DVector::from_vec(vec![0.0, 0.1]);
        let concentrations = DVector::from_vec(vec![1.0, 0.5, 0.2]);
        assert!(TransportProfile::new(positions, concentrations).is_err());
    }

    #[test]
    fn test_pairs_and_get() {
        let profile = TransportProfile::new(
            DVector::from_vec(vec![-0.004, 0.0, 0.1]),
            DVector::from_vec(vec![1.0, 1.0, 0.3]),
        )
        .unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.get(2), Some((0.1, 0.3)));
        assert_eq!(profile.get(3), None);

        let pairs: Vec<_> = profile.pairs().collect();
        assert_eq!(pairs[0], (-0.004, 1.0));
        assert_eq!(pairs[2], (0.1, 0.3));
    }

    #[test]
    fn test_outlet_and_max() {
        let profile = TransportProfile::new(
            DVector::from_vec(vec![0.0, 0.1, 0.2]),
            DVector::from_vec(vec![1.0, 0.6, 0.1]),
        )
        .unwrap();

        assert_eq!(profile.outlet_concentration(), 0.1);
        assert_eq!(profile.max_concentration(), 1.0);
    }
}
