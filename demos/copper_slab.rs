//! Copper Plate Between Two Heat Baths
//!
//! ∂T/∂t = α·∂²T/∂x²,  α = λ/(ρ·c)
//!
//! - Dirichlet boundaries: T(0) = 200 °C, T(L) = 50 °C
//! - Initial state: 20 °C everywhere inside
//!
//! Run with the built-in parameters, or pass a JSON parameter file:
//!
//! ```bash
//! RUST_LOG=info cargo run --example copper_slab
//! cargo run --example copper_slab -- run.json
//! cargo run --example copper_slab --features plot
//! ```

use heat_rs::config::SimulationParameters;
use heat_rs::output::export::{CsvExporter, Exporter};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => SimulationParameters::from_json_file(path)?,
        None => SimulationParameters::default(),
    };

    println!("Parameters:\n{}\n", params.to_json_string()?);

    let result = params.solve()?;
    println!("{}", result.summary());

    let exact = params.scenario().analytical();
    let t = result.total_time;
    println!("\n  x [m]      T [°C]     Fourier [°C]");
    for (x, temperature) in result.profile() {
        println!("  {:<8.4} {:>10.4} {:>12.4}", x, temperature, exact.transient_profile(x, t, 200));
    }

    let out_dir = std::env::temp_dir().join("heat_rs_copper_slab");
    std::fs::create_dir_all(&out_dir)?;

    let exporter = CsvExporter::with_run_metadata(&result);
    exporter.export_profile(&result, out_dir.join("profile.csv"))?;
    exporter.export_center_series(&result, None, out_dir.join("center.csv"))?;

    #[cfg(feature = "plot")]
    {
        use heat_rs::output::visualization::{plot_center_history, plot_profile_with_steady_state};

        let profile_png = out_dir.join("profile.png");
        let center_png = out_dir.join("center.png");
        plot_profile_with_steady_state(&result, &profile_png.to_string_lossy(), None)?;
        plot_center_history(&result, &center_png.to_string_lossy(), None)?;
    }

    println!("\nResults written to {}", out_dir.display());
    Ok(())
}
