//! Analytical transport solution
//!
//! The heart of the crate: a closed-form evaluation of the 1D
//! advection-dispersion-reaction equation on a fixed sample grid.
//!
//! - [`TransportEvaluator`]: the formula (WHAT the curve is)
//! - [`TransportProfile`]: the result (ordered position/concentration pairs)
//!
//! The evaluator is deliberately the *only* place the formula exists; both
//! the initial render and the generated client-side recompute derive from it.

pub mod evaluator;
pub mod profile;

pub use evaluator::{TransportEvaluator, C0};
pub use profile::TransportProfile;
