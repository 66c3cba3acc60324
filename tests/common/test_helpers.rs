//! Helper functions for integration tests

use heat_rs::physics::Material;
use heat_rs::solver::{DirichletBoundaries, Scenario, SimulationResult};

/// Copper slab of 0.1 m, 200 °C on the left, 50 °C on the right, 20 °C inside
pub fn copper_scenario() -> Scenario {
    slab_scenario(0.1, Material::new(8960.0, 400.0, 400.0), 200.0, 50.0, 20.0)
}

/// Slab with arbitrary geometry, material and temperatures
pub fn slab_scenario(length: f64, material: Material, left: f64, right: f64, initial: f64) -> Scenario {
    Scenario::new(length, material, DirichletBoundaries::new(left, right), initial)
}

/// Largest |T_numerical - T_analytical| over all nodes of the final profile
pub fn max_abs_error(result: &SimulationResult, exact: impl Fn(f64) -> f64) -> f64 {
    result
        .profile()
        .into_iter()
        .map(|(x, t)| (t - exact(x)).abs())
        .fold(0.0, f64::max)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
