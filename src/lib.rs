//! adre-rs: Interactive 1D Column Transport
//!
//! Closed-form solution of the one-dimensional advection-dispersion-reaction
//! equation (ADRE) for solute transport through a porous column, rendered as
//! a self-contained interactive HTML page. Built with Rust for performance
//! and safety.
//!
//! # Architecture
//!
//! adre-rs is built on two core principles:
//!
//! 1. **One authoritative formula**
//!    - The Transport Profile Evaluator is the single place the analytical
//!      solution is written down
//!    - The generated page's client script is derived from the same constants
//!      and coefficient tables, so the server-rendered and slider-recomputed
//!      curves cannot drift apart
//!
//! 2. **Validated boundaries**
//!    - Parameter domains are checked once at the entry points
//!    - Inside those boundaries evaluation is pure and total (no NaN paths)
//!
//! # Quick Start
//!
//! ```rust
//! use adre_rs::physics::ColumnParameters;
//! use adre_rs::transport::TransportEvaluator;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Choose a parameter set (defaults are the reference scenario)
//! let mut params = ColumnParameters::default();
//! params.flow_rate = 40.0; // mL/h
//!
//! // 2. Evaluate the concentration profile
//! let evaluator = TransportEvaluator::new();
//! let profile = evaluator.evaluate(&params)?;
//!
//! // 3. Access results
//! println!("outlet concentration: {:.3e}", profile.outlet_concentration());
//! # Ok(())
//! # }
//! ```
//!
//! Generating the page:
//!
//! ```rust,ignore
//! use adre_rs::output::page::PageBuilder;
//!
//! PageBuilder::new(params)?.write_to("column.html")?;
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Parameters, domains, unit conversions, the erfc kernel
//! - [`transport`]: The Transport Profile Evaluator and its profiles
//! - [`output`]: Page generation, CSV export, static plots

pub mod physics;
pub mod transport;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use adre_rs::prelude::*;
    //! ```
    pub use crate::output::export::{export_profile_csv, read_profile_csv, CsvConfig};
    pub use crate::output::page::{PageBuilder, PageError};
    pub use crate::output::visualization::{plot_profile, PlotConfig};
    pub use crate::physics::{sliders, ColumnParameters, SliderScale, SliderSpec};
    pub use crate::transport::{TransportEvaluator, TransportProfile};
}
