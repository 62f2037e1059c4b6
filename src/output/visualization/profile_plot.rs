//! Static rendering of concentration profiles
//!
//! Draws concentration-versus-position curves to PNG or SVG files. These are
//! the non-interactive counterparts of the generated page: same axis bounds,
//! same default red curve, useful for reports and regression artifacts.
//!
//! # Available functions
//!
//! - [`plot_profile`]             - single profile
//! - [`plot_profiles_comparison`] - several parameter sets on the same axes
//!
//! # Usage
//!
//! ```rust,ignore
//! use adre_rs::output::visualization::plot_profile;
//!
//! let profile = TransportEvaluator::new().evaluate(&params)?;
//! plot_profile(&profile, "profile.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::transport::TransportProfile;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a single concentration profile
///
/// # Arguments
///
/// * `profile`     - Profile to draw
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the profile is empty or the backend cannot write to
/// `output_path`.
pub fn plot_profile(
    profile: &TransportProfile,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profile.is_empty() {
        return Err("Empty profile".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let datasets = vec![("c(t)/c0", profile)];

    match backend_kind(output_path) {
        BackendKind::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_impl(backend, &datasets, config, false)
        }
        BackendKind::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_impl(backend, &datasets, config, false)
        }
    }
}

/// Plot several profiles overlaid for comparison
///
/// Useful for comparing different times, flow rates or reaction coefficients
/// on the same axes. Each dataset is drawn with a distinct colour from the
/// palette (or `config.series_colors`).
///
/// # Arguments
///
/// * `datasets`    - `(label, profile)` pairs
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional plot configuration
///
/// # Errors
///
/// Returns `Err` when `datasets` is empty or the backend fails.
pub fn plot_profiles_comparison(
    datasets: Vec<(&str, &TransportProfile)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    match backend_kind(output_path) {
        BackendKind::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_impl(backend, &datasets, config, true)
        }
        BackendKind::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_impl(backend, &datasets, config, true)
        }
    }
}

// =================================================================================================
// Private Implementation
// =================================================================================================

enum BackendKind {
    Bitmap,
    Svg,
}

/// Choose the drawing backend from the file extension
fn backend_kind(output_path: &str) -> BackendKind {
    match std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
    {
        Some("svg") => BackendKind::Svg,
        _ => BackendKind::Bitmap,
    }
}

/// Render one or more profiles with the given drawing backend
fn plot_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, &TransportProfile)],
    config: &PlotConfig,
    palette: bool,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    // Common x-range across all datasets
    let x_min = datasets
        .iter()
        .map(|(_, p)| p.positions()[0])
        .fold(f64::INFINITY, f64::min);
    let x_max = datasets
        .iter()
        .map(|(_, p)| p.positions()[p.len() - 1])
        .fold(f64::NEG_INFINITY, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..config.concentration_ceiling)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (idx, (label, profile)) in datasets.iter().enumerate() {
        let color = if palette {
            config.get_series_color(idx)
        } else {
            config.line_color
        };

        chart
            .draw_series(LineSeries::new(
                profile.pairs(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ColumnParameters;
    use crate::transport::TransportEvaluator;

    fn run_profile() -> TransportProfile {
        TransportEvaluator::with_samples(128)
            .evaluate(&ColumnParameters::default())
            .unwrap()
    }

    #[test]
    fn test_plot_profile_png() {
        let profile = run_profile();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_profile(&profile, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_profile_svg() {
        let profile = run_profile();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_profile(&profile, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_profile_custom_config() {
        let profile = run_profile();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let mut config = PlotConfig::profile("Breakthrough at 6 h");
        config.line_color = BLUE;
        plot_profile(&profile, path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison() {
        let evaluator = TransportEvaluator::with_samples(128);
        let slow = evaluator.evaluate(&ColumnParameters::default()).unwrap();

        let mut fast_params = ColumnParameters::default();
        fast_params.flow_rate = 80.0;
        let fast = evaluator.evaluate(&fast_params).unwrap();

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_profiles_comparison(
            vec![("25 mL/h", &slow), ("80 mL/h", &fast)],
            path.to_str().unwrap(),
            None,
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_empty_returns_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        assert!(plot_profiles_comparison(vec![], path.to_str().unwrap(), None).is_err());
    }
}
