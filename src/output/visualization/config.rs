//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust,ignore
/// use heat_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Copper slab");
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

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Temperature (°C)")
    pub ylabel: String,

    /// Color of the simulated curve (default: RED)
    pub line_color: RGBColor,

    /// Color of reference curves such as the steady state (default: BLUE)
    pub reference_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: "Temperature (°C)".to_string(),
            line_color: RED,
            reference_color: BLUE,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
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
    /// Config for the final spatial profile
    ///
    /// Sets xlabel to "Position (m)" and title to the given value or
    /// "Temperature Profile".
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "Position (m)".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Temperature Profile".to_string()),
            ..Self::default()
        }
    }

    /// Config for the center temperature history
    ///
    /// Sets xlabel to "Time (s)" and title to the given value or
    /// "Center Temperature".
    pub fn center_history(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "Time (s)".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Center Temperature".to_string()),
            ..Self::default()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
