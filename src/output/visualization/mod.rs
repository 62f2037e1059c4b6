//! Static profile visualization
//!
//! Non-interactive renderings of concentration profiles (PNG/SVG via
//! plotters), sharing axis conventions with the generated page.

pub mod config;
pub mod profile_plot;

pub use config::{PlotConfig, NO_TITLE};
pub use profile_plot::{plot_profile, plot_profiles_comparison};
