//! Column and transport parameters
//!
//! This module defines the seven independently adjustable parameters of the
//! column transport problem, their validated domains, the derived quantities
//! (cross-section, pore velocity), and the slider metadata that drives the
//! interactive page.
//!
//! # Units
//!
//! | Parameter    | Unit  | Domain   |
//! |--------------|-------|----------|
//! | `time`       | s     | > 0      |
//! | `length`     | m     | > 0      |
//! | `radius`     | m     | > 0      |
//! | `dispersion` | m²/s  | > 0      |
//! | `reaction`   | 1/s   | ≥ 0      |
//! | `flow_rate`  | mL/h  | > 0      |
//! | `porosity`   | -     | (0, 1]   |
//!
//! # Example
//!
//! ```rust
//! use adre_rs::physics::ColumnParameters;
//!
//! let params = ColumnParameters::default();
//! params.validate().unwrap();
//!
//! // Reference scenario: q = 25 mL/h, n = 0.5, r = 0.05 m → v ≈ 1.768e-6 m/s
//! assert!((params.pore_velocity() - 1.768e-6).abs() < 1e-9);
//! ```

use serde::Serialize;
use std::f64::consts::PI;

// =================================================================================================
// Unit Conversion
// =================================================================================================

/// Conversion divisor from mL/h to m³/s, times m² of cross-section
///
/// Derivation (do not treat as a magic number):
///
/// ```text
/// 1 mL   = 1e-6 m³
/// 1 h    = 3600 s
/// 1 mL/h = 1e-6 / 3600 m³/s      →  divide by 1e6 · 3600 = 3.6e9
/// ```
///
/// Dividing a flow in mL/h by `3.6e9 · porosity · area[m²]` therefore yields a
/// pore velocity in m/s.
pub const ML_PER_HOUR_PER_M3_PER_S: f64 = 3.6e9;

/// Fraction of the column length shown upstream of the inlet
///
/// The sample domain starts at `-UPSTREAM_FRACTION · length` so the constant
/// inlet boundary (c = 1) is visible on the plot.
pub const UPSTREAM_FRACTION: f64 = 0.02;

/// Cosmetic ceiling of the concentration axis
///
/// Display headroom only. Computed concentrations are never clamped to it.
pub const AXIS_CEILING: f64 = 1.05;

// =================================================================================================
// Column Parameters
// =================================================================================================

/// The seven adjustable parameters of the column transport problem
///
/// All fields are plain `f64` so the structure maps one-to-one onto the
/// sliders of the interactive page. Use [`validate`](Self::validate) before
/// evaluating: the analytical solution divides by `time`, `dispersion`,
/// `porosity`, `radius²` and `flow_rate`-derived velocity, so non-positive
/// values there are rejected at this boundary rather than surfacing as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnParameters {
    /// Elapsed time since tracer injection \[s\]
    pub time: f64,

    /// Column length \[m\]
    pub length: f64,

    /// Column radius \[m\]
    pub radius: f64,

    /// Hydrodynamic dispersion coefficient \[m²/s\]
    pub dispersion: f64,

    /// First-order reaction / decay rate \[1/s\]
    pub reaction: f64,

    /// Volumetric flow rate \[mL/h\]
    pub flow_rate: f64,

    /// Porosity \[-\]
    pub porosity: f64,
}

impl Default for ColumnParameters {
    /// Reference scenario of the interactive page
    ///
    /// t = 21636 s (~6 h), L = 0.2 m, r = 0.05 m, D = 1e-8 m²/s,
    /// k = 1e-6 1/s, q = 25 mL/h, n = 0.5 - yielding v ≈ 1.768e-6 m/s.
    fn default() -> Self {
        Self {
            time: 21_636.0,
            length: 0.2,
            radius: 0.05,
            dispersion: 1e-8,
            reaction: 1e-6,
            flow_rate: 25.0,
            porosity: 0.5,
        }
    }
}

impl ColumnParameters {
    /// Validate that all parameters lie in their documented domains
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending parameter. The square-root and
    /// division terms of the analytical solution are undefined outside these
    /// domains, so evaluation refuses to start rather than produce NaN.
    pub fn validate(&self) -> Result<(), String> {
        if !self.time.is_finite() || self.time <= 0.0 {
            return Err(format!("time must be positive, got {}", self.time));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(format!("length must be positive, got {}", self.length));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(format!("radius must be positive, got {}", self.radius));
        }
        if !self.dispersion.is_finite() || self.dispersion <= 0.0 {
            return Err(format!(
                "dispersion must be positive, got {}",
                self.dispersion
            ));
        }
        if !self.reaction.is_finite() || self.reaction < 0.0 {
            return Err(format!(
                "reaction must be non-negative, got {}",
                self.reaction
            ));
        }
        if !self.flow_rate.is_finite() || self.flow_rate <= 0.0 {
            return Err(format!(
                "flow rate must be positive, got {}",
                self.flow_rate
            ));
        }
        if !self.porosity.is_finite() || self.porosity <= 0.0 || self.porosity > 1.0 {
            return Err(format!(
                "porosity must be in (0, 1], got {}",
                self.porosity
            ));
        }
        Ok(())
    }

    /// Cross-sectional area of the column: A = π·r² \[m²\]
    pub fn cross_section(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Average pore velocity \[m/s\]
    ///
    /// v = q / (3.6e9 · n · A) - see [`ML_PER_HOUR_PER_M3_PER_S`] for the
    /// unit derivation. Linear in `flow_rate` at fixed radius and porosity.
    pub fn pore_velocity(&self) -> f64 {
        self.flow_rate / (ML_PER_HOUR_PER_M3_PER_S * self.porosity * self.cross_section())
    }
}

// =================================================================================================
// Slider Metadata
// =================================================================================================

/// Scale of a slider track
///
/// Log-scaled sliders store `ln(value)` in the control and exponentiate in
/// the readout and the recompute path, so a fixed step count spans several
/// decades evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderScale {
    Linear,
    Log,
}

/// Unit rendered in a slider readout
///
/// Determines how the client script formats the current value next to the
/// slider (hours for time, exponential notation for the log-decade ranges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderUnit {
    Hours,
    Meters,
    SquareMetersPerSecond,
    PerSecond,
    MilliLitersPerHour,
    Dimensionless,
}

/// Static description of one parameter slider
///
/// One table entry per parameter drives both the generated markup and the
/// client script, so ranges and defaults cannot diverge between the two.
#[derive(Debug, Clone, Copy)]
pub struct SliderSpec {
    /// HTML element id, also the key the client script reads
    pub id: &'static str,

    /// Human-readable label above the slider
    pub label: &'static str,

    /// Track minimum (raw slider units: ln(value) for log scales)
    pub min: f64,

    /// Track maximum (raw slider units)
    pub max: f64,

    /// Track step (raw slider units)
    pub step: f64,

    /// Scale of the track
    pub scale: SliderScale,

    /// Readout unit
    pub unit: SliderUnit,
}

impl SliderSpec {
    /// Raw track value for a physical parameter value
    ///
    /// Identity for linear sliders, `ln(value)` for log sliders.
    pub fn raw_from_value(&self, value: f64) -> f64 {
        match self.scale {
            SliderScale::Linear => value,
            SliderScale::Log => value.ln(),
        }
    }

    /// Physical parameter value for a raw track value
    pub fn value_from_raw(&self, raw: f64) -> f64 {
        match self.scale {
            SliderScale::Linear => raw,
            SliderScale::Log => raw.exp(),
        }
    }
}

/// Slider table of the interactive page, in display order
///
/// Ranges follow the reference scenario: time spans 36 s .. 2 weeks on a log
/// track, dispersion 1e-9..1e-7 m²/s and reaction 1e-8..1e-3 1/s over whole
/// decades, the geometric and flow parameters on linear tracks.
///
/// A function rather than a `const` because the log bounds are computed with
/// `f64::ln`, which keeps them exact with respect to the documented physical
/// ranges instead of hand-copied decimal literals.
pub fn sliders() -> [SliderSpec; 7] {
    let time_min = 36.0f64.ln();
    let time_max = 1.2096e6f64.ln();
    let dispersion_min = 1e-9f64.ln();
    let dispersion_max = 1e-7f64.ln();
    let reaction_min = 1e-8f64.ln();
    let reaction_max = 1e-3f64.ln();

    [
        SliderSpec {
            id: "time",
            label: "Time",
            min: time_min,
            max: time_max,
            step: (time_max - time_min) / 1000.0,
            scale: SliderScale::Log,
            unit: SliderUnit::Hours,
        },
        SliderSpec {
            id: "length",
            label: "Column length",
            min: 0.01,
            max: 1.0,
            step: 0.01,
            scale: SliderScale::Linear,
            unit: SliderUnit::Meters,
        },
        SliderSpec {
            id: "radius",
            label: "Column radius",
            min: 0.005,
            max: 0.5,
            step: 0.001,
            scale: SliderScale::Linear,
            unit: SliderUnit::Meters,
        },
        SliderSpec {
            id: "dispersion",
            label: "Dispersion coefficient",
            min: dispersion_min,
            max: dispersion_max,
            step: (dispersion_max - dispersion_min) / 100.0,
            scale: SliderScale::Log,
            unit: SliderUnit::SquareMetersPerSecond,
        },
        SliderSpec {
            id: "reaction",
            label: "Reaction coefficient",
            min: reaction_min,
            max: reaction_max,
            step: (reaction_max - reaction_min) / 100.0,
            scale: SliderScale::Log,
            unit: SliderUnit::PerSecond,
        },
        SliderSpec {
            id: "flow",
            label: "Flow rate",
            min: 1.0,
            max: 100.0,
            step: 1.0,
            scale: SliderScale::Linear,
            unit: SliderUnit::MilliLitersPerHour,
        },
        SliderSpec {
            id: "porosity",
            label: "Porosity",
            min: 0.01,
            max: 1.0,
            step: 0.01,
            scale: SliderScale::Linear,
            unit: SliderUnit::Dimensionless,
        },
    ]
}

impl ColumnParameters {
    /// Current value of the parameter a slider controls
    pub fn value_for(&self, id: &str) -> Option<f64> {
        match id {
            "time" => Some(self.time),
            "length" => Some(self.length),
            "radius" => Some(self.radius),
            "dispersion" => Some(self.dispersion),
            "reaction" => Some(self.reaction),
            "flow" => Some(self.flow_rate),
            "porosity" => Some(self.porosity),
            _ => None,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters_are_valid() {
        assert!(ColumnParameters::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_domains_rejected() {
        let base = ColumnParameters::default();

        let mut p = base;
        p.time = 0.0;
        assert!(p.validate().is_err());

        let mut p = base;
        p.dispersion = -1e-8;
        assert!(p.validate().is_err());

        let mut p = base;
        p.radius = 0.0;
        assert!(p.validate().is_err());

        let mut p = base;
        p.porosity = 1.2;
        assert!(p.validate().is_err());

        let mut p = base;
        p.flow_rate = -5.0;
        assert!(p.validate().is_err());

        let mut p = base;
        p.length = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_zero_reaction_is_valid() {
        let mut p = ColumnParameters::default();
        p.reaction = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_cross_section() {
        let p = ColumnParameters::default();
        assert_relative_eq!(p.cross_section(), PI * 0.05 * 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_pore_velocity_reference_scenario() {
        // q = 25 mL/h, n = 0.5, r = 0.05 m → v ≈ 1.768e-6 m/s
        let p = ColumnParameters::default();
        assert_relative_eq!(p.pore_velocity(), 1.768e-6, max_relative = 1e-3);
    }

    #[test]
    fn test_unit_constant_derivation() {
        // 1 mL/h through 1 m² at porosity 1 must equal 1e-6/3600 m/s
        let p = ColumnParameters {
            flow_rate: 1.0,
            porosity: 1.0,
            radius: (1.0 / PI).sqrt(), // area = 1 m²
            ..ColumnParameters::default()
        };
        assert_relative_eq!(p.pore_velocity(), 1e-6 / 3600.0, epsilon = 1e-18);
    }

    #[test]
    fn test_velocity_linear_in_flow_rate() {
        let mut p = ColumnParameters::default();
        let v1 = p.pore_velocity();
        p.flow_rate *= 2.0;
        let v2 = p.pore_velocity();
        assert_relative_eq!(v2 / v1, 2.0, epsilon = 1e-12);

        p.flow_rate *= 3.5;
        assert_relative_eq!(p.pore_velocity() / v1, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_slider_table_covers_all_parameters() {
        let p = ColumnParameters::default();
        for spec in &sliders() {
            assert!(
                p.value_for(spec.id).is_some(),
                "slider {} has no parameter",
                spec.id
            );
        }
    }

    #[test]
    fn test_slider_defaults_inside_track() {
        let p = ColumnParameters::default();
        for spec in &sliders() {
            let raw = spec.raw_from_value(p.value_for(spec.id).unwrap());
            assert!(
                raw >= spec.min - 1e-9 && raw <= spec.max + 1e-9,
                "default of {} outside its track: {} not in [{}, {}]",
                spec.id, raw, spec.min, spec.max
            );
        }
    }

    #[test]
    fn test_log_slider_round_trip() {
        let table = sliders();
        let spec = &table[0]; // time, log scale
        let raw = spec.raw_from_value(21_636.0);
        assert_relative_eq!(spec.value_from_raw(raw), 21_636.0, epsilon = 1e-9);
    }

    #[test]
    fn test_log_slider_bounds_match_documented_ranges() {
        let table = sliders();
        // time: 36 s .. 1.2096e6 s (two weeks)
        assert_relative_eq!(table[0].min.exp(), 36.0, max_relative = 1e-12);
        assert_relative_eq!(table[0].max.exp(), 1.2096e6, max_relative = 1e-12);
        // dispersion: 1e-9 .. 1e-7 m²/s
        assert_relative_eq!(table[3].min.exp(), 1e-9, max_relative = 1e-12);
        assert_relative_eq!(table[3].max.exp(), 1e-7, max_relative = 1e-12);
        // reaction: 1e-8 .. 1e-3 1/s
        assert_relative_eq!(table[4].min.exp(), 1e-8, max_relative = 1e-12);
        assert_relative_eq!(table[4].max.exp(), 1e-3, max_relative = 1e-12);
    }
}
