//! Complementary error function kernel
//!
//! The analytical ADRE solution needs `erfc`, which the Rust standard library
//! does not provide. This module carries a compact rational approximation
//! (Chebyshev-type fit, fractional error below 1.2e-7 everywhere) built around
//! a single public coefficient table.
//!
//! # One formula, two targets
//!
//! The same table drives two evaluation paths:
//!
//! - [`erfc`] / [`erf`] - the native evaluation used by the
//!   Transport Profile Evaluator for the initial server-side render
//! - [`erfc_js_source`] - a JavaScript rendering of the *same* Horner loop
//!   over the *same* coefficients, embedded in the generated page for the
//!   slider-driven recompute
//!
//! Because both paths evaluate the identical polynomial in the identical
//! order on IEEE-754 doubles, the client and server curves match bit for bit.
//! A hand-maintained second copy of the formula would be a correctness risk.
//!
//! # Example
//!
//! ```rust
//! use adre_rs::physics::{erf, erfc};
//!
//! assert!((erfc(0.0) - 1.0).abs() < 1e-7);
//! assert!((erf(1.0) - 0.842700793).abs() < 1e-6);
//! // The two formulations are interchangeable
//! assert!((erfc(0.7) - (1.0 - erf(0.7))).abs() < 1e-12);
//! ```

// =================================================================================================
// Coefficient Table
// =================================================================================================

/// Coefficients of the `erfc` fit, ascending powers of `t = 1/(1 + |x|/2)`
///
/// The approximation is
///
/// ```text
/// erfc(x) ≈ t · exp(-x² + P(t)),    t = 1 / (1 + |x|/2)
/// P(t) = c₀ + t·(c₁ + t·(c₂ + ... ))
/// ```
///
/// valid for x ≥ 0; negative arguments use the symmetry erfc(-x) = 2 - erfc(x).
///
/// Public so the page generator can serialize the exact same table into the
/// client-side script.
pub const ERFC_COEFFICIENTS: [f64; 10] = [
    -1.265_512_23,
    1.000_023_68,
    0.374_091_96,
    0.096_784_18,
    -0.186_288_06,
    0.278_868_07,
    -1.135_203_98,
    1.488_515_87,
    -0.822_152_23,
    0.170_872_77,
];

// =================================================================================================
// Native Evaluation
// =================================================================================================

/// Complementary error function erfc(x) = 1 - erf(x)
///
/// Fractional error below 1.2e-7 over the whole real line.
/// Range: (0, 2), with erfc(0) = 1, erfc(+∞) → 0, erfc(-∞) → 2.
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);

    // Horner evaluation of P(t); keep the iteration order identical to the
    // generated JavaScript (see erfc_js_source) so both produce the same bits.
    let mut poly = 0.0;
    for &c in ERFC_COEFFICIENTS.iter().rev() {
        poly = poly * t + c;
    }

    let ans = t * (-z * z + poly).exp();

    if x >= 0.0 { ans } else { 2.0 - ans }
}

/// Error function erf(x) = 1 - erfc(x)
///
/// Provided so callers can use whichever formulation reads naturally;
/// both are backed by the same coefficient table.
pub fn erf(x: f64) -> f64 {
    1.0 - erfc(x)
}

// =================================================================================================
// Embeddable Form
// =================================================================================================

/// Render the erfc kernel as a self-contained JavaScript function
///
/// Emits the coefficient table verbatim (shortest round-trip f64 literals)
/// and the same Horner loop as the native [`erfc`], so the client-side
/// recompute path cannot drift from the server-side render.
///
/// # Returns
///
/// JavaScript source defining `function erfc(x) { ... }`.
pub fn erfc_js_source() -> String {
    let table = ERFC_COEFFICIENTS
        .iter()
        .map(|c| format!("{:?}", c))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "const ERFC_C = [{table}];\n\
         function erfc(x) {{\n\
         \x20 const z = Math.abs(x);\n\
         \x20 const t = 1.0 / (1.0 + 0.5 * z);\n\
         \x20 let poly = 0.0;\n\
         \x20 for (let i = ERFC_C.length - 1; i >= 0; i--) {{ poly = poly * t + ERFC_C[i]; }}\n\
         \x20 const ans = t * Math.exp(-z * z + poly);\n\
         \x20 return x >= 0.0 ? ans : 2.0 - ans;\n\
         }}\n"
    )
}

// =================================================================================================
// Tests
// =================================================================================================
