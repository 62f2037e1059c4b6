//! Physical parameters and special functions
//!
//! This module holds the inputs of the transport problem and the
//! mathematical kernel the analytical solution is built on:
//!
//! - [`ColumnParameters`]: the seven adjustable parameters, their validated
//!   domains and the derived quantities (cross-section, pore velocity)
//! - [`sliders`]: the slider metadata table that drives the interactive page
//! - [`erf`] / [`erfc`]: the error-function kernel shared between the native
//!   evaluation and the generated client-side script

pub mod parameters;
pub mod special;

pub use parameters::{
    sliders, ColumnParameters, SliderScale, SliderSpec, SliderUnit, AXIS_CEILING,
    ML_PER_HOUR_PER_M3_PER_S, UPSTREAM_FRACTION,
};
pub use special::{erf, erfc, erfc_js_source, ERFC_COEFFICIENTS};
