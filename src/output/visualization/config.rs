//! Plot configuration for profile rendering
//!
//! Shared configuration for the static profile plots. The concentration axis
//! is pinned to `0..1.05` by default - the same cosmetic headroom the
//! interactive page uses - so static and interactive renderings agree.

use plotters::prelude::*;

use crate::physics::AXIS_CEILING;

/// Configuration for customizing profile plots
///
/// # Example
///
/// ```rust,ignore
/// use adre_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Breakthrough at t = 6 h");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label (default: "x [m]")
    pub xlabel: String,

    /// Y-axis label (default: "c(t)/c0")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for comparison plots (one per dataset)
    ///
    /// If None, uses the default palette.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 3)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Upper bound of the concentration axis (default: [`AXIS_CEILING`])
    ///
    /// Display headroom, not a clamp: values are drawn as computed.
    pub concentration_ceiling: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Concentration Profile".to_string(),
            xlabel: "x [m]".to_string(),
            ylabel: "c(t)/c0".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 3,
            show_grid: true,
            concentration_ceiling: AXIS_CEILING,
        }
    }
}

/// Helper trait to accept `String`, `&str` or `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for a spatial concentration profile
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::profile("Breakthrough at t = 6 h");
    /// let config = PlotConfig::profile(NO_TITLE);
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Concentration Profile".to_string());
        config
    }

    /// Create config for comparison plots with custom colors
    pub fn comparison_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for the dataset at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette.
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        // Default palette
        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
        ];

        default_colors[index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
