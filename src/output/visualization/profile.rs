//! Spatial temperature profile plotting

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{is_svg, padded_range};
use crate::solver::SimulationResult;

/// Resolution of the analytical steady-state curve
const STEADY_STATE_POINTS: usize = 200;

/// Plot the temperature profile at the final time
///
/// # Example
///
/// ```rust,ignore
/// plot_profile(&result, "profile.png", None)?;
/// ```
pub fn plot_profile(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    draw(result, false, output_path, config)
}

/// Plot the final profile together with the linear steady state between
/// the two boundary temperatures
pub fn plot_profile_with_steady_state(
    result: &SimulationResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    draw(result, true, output_path, config)
}

fn draw(
    result: &SimulationResult,
    with_steady_state: bool,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let profile = result.profile();
    if profile.is_empty() {
        return Err("Empty temperature profile".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let steady = if with_steady_state {
        let (left, right) = (profile[0].1, profile[profile.len() - 1].1);
        let length = result.grid.length();
        (0..STEADY_STATE_POINTS)
            .map(|i| {
                let x = length * i as f64 / (STEADY_STATE_POINTS - 1) as f64;
                (x, left + (right - left) * x / length)
            })
            .collect()
    } else {
        Vec::new()
    };

    if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_profile_impl(backend, &profile, &steady, result.grid.length(), config)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_profile_impl(backend, &profile, &steady, result.grid.length(), config)
    }
}

/// Implementation for profile plotting with concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    profile: &[(f64, f64)],
    steady: &[(f64, f64)],
    length: f64,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let y_range = padded_range(profile.iter().chain(steady.iter()).map(|(_, t)| t));

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..length, y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            profile.iter().copied(),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Final profile")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart.draw_series(
        profile
            .iter()
            .map(|&(x, t)| Circle::new((x, t), 3, config.line_color.filled())),
    )?;

    if !steady.is_empty() {
        chart
            .draw_series(LineSeries::new(
                steady.iter().copied(),
                ShapeStyle::from(&config.reference_color).stroke_width(1),
            ))?
            .label("Steady state")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.reference_color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
