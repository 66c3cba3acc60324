//! Visualization of heat conduction results
//!
//! Plots are drawn with `plotters`; the output format follows the file
//! extension (`.svg` for vector output, anything else for PNG). Only compiled
//! with the `plot` feature.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (temperature vs position at the final time)
//! - **history**: Temporal plots (center temperature vs time)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_center_history, plot_profile, PlotConfig};
//!
//! let result = SimulationParameters::default().solve()?;
//!
//! plot_profile(&result, "profile.png", None)?;
//!
//! let config = PlotConfig::center_history("Copper slab, x = L/2");
//! plot_center_history(&result, "center.svg", Some(&config))?;
//! ```
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Final temperature profile | `profile` | `plot_profile` |
//! | Profile against steady state | `profile` | `plot_profile_with_steady_state` |
//! | Center temperature history | `history` | `plot_center_history` |

pub mod config;
pub mod history;
pub mod profile;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use history::plot_center_history;
pub use profile::{plot_profile, plot_profile_with_steady_state};

use std::ops::Range;

/// Temperature axis range padded by 5 % of the span
pub(crate) fn padded_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    let pad = ((hi - lo) * 0.05).max(1e-6);
    (lo - pad)..(hi + pad)
}

/// Whether the path asks for SVG output
pub(crate) fn is_svg(output_path: &str) -> bool {
    std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let range = padded_range(&[50.0, 200.0]);
        assert!((range.start - 42.5).abs() < 1e-12);
        assert!((range.end - 207.5).abs() < 1e-12);
    }

    #[test]
    fn test_padded_range_flat_and_empty() {
        let range = padded_range(&[20.0, 20.0]);
        assert!(range.start < 20.0 && range.end > 20.0);
        assert_eq!(padded_range(&[]), 0.0..1.0);
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg("out/plot.svg"));
        assert!(is_svg("PLOT.SVG"));
        assert!(!is_svg("plot.png"));
        assert!(!is_svg("plot"));
    }
}
