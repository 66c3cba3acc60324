//! Center temperature history plotting

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{is_svg, padded_range};
use crate::solver::SimulationResult;

/// Plot the sampled center temperature against time
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::center_history("Copper slab");
/// plot_center_history(&result, "center.png", Some(&config))?;
/// ```
pub fn plot_center_history(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let samples = result.center_series.samples();
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err("No center samples recorded".into());
    };

    let default_config = PlotConfig::center_history(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // A single sample still needs a non-empty time axis
    let t_end = if last.0 > first.0 { last.0 } else { first.0 + 1.0 };
    let time_range = first.0..t_end;

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_history_impl(backend, samples, time_range, config)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_history_impl(backend, samples, time_range, config)
    }
}

fn plot_history_impl<DB: DrawingBackend>(
    backend: DB,
    samples: &[(f64, f64)],
    time_range: std::ops::Range<f64>,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let y_range = padded_range(samples.iter().map(|(_, t)| t));

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(time_range, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|t| format!("{:.2}", t))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        samples.iter().copied(),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationParameters;
    use tempfile::tempdir;

    #[test]
    fn test_plot_center_history_svg() {
        let result = SimulationParameters {
            total_time: 0.05,
            ..Default::default()
        }
        .solve()
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("center.svg");
        let path = path.to_str().unwrap();

        plot_center_history(&result, path, Some(&PlotConfig::center_history("Center"))).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
    }
}
