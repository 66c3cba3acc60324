//! Backward-Euler finite-difference solver
//!
//! # Mathematical Background
//!
//! The heat equation ∂T/∂t = α·∂²T/∂x² is discretized with backward differences
//! in time and central differences in space:
//!
//! ```text
//! (T_i^{n+1} - T_i^n) / dt = α · (T_{i-1}^{n+1} - 2 T_i^{n+1} + T_{i+1}^{n+1}) / dx²
//! ```
//!
//! which rearranges into one tridiagonal system per step,
//!
//! ```text
//! -r T_{i-1}^{n+1} + (1 + 2r) T_i^{n+1} - r T_{i+1}^{n+1} = T_i^n,    r = α dt / dx²
//! ```
//!
//! solved by the sweep in [`crate::solver::sweep`].
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: unconditional, and the discrete maximum principle holds for
//!   every r > 0: no node ever leaves the range of the initial and boundary
//!   temperatures
//! - **Memory**: two field buffers and one pair of sweep buffers, allocated once

use nalgebra::DVector;

use crate::error::HeatResult;
use crate::solver::sweep::{SweepCoefficients, TridiagonalStencil};
use crate::solver::{
    sample_count, validate_field, CenterSeries, Grid, Scenario, SimulationResult, Solver,
    SolverConfiguration,
};

/// Largest mesh ratio for which forward-time differencing would be stable
const EXPLICIT_STABILITY_LIMIT: f64 = 0.5;

// =================================================================================================
// Implicit Euler Solver
// =================================================================================================

/// Backward-Euler time-stepping solver with a Thomas sweep per step
///
/// # Algorithm
///
/// 1. Build the grid and the initial field (interior `T_initial`, ends fixed)
/// 2. For each step n = 0 .. nt-1:
///    - forward sweep over the interior using the previous field as RHS
///    - backward substitution into a second buffer, ends written explicitly
///    - swap buffers (the old field is never read after it is replaced)
///    - on every `sample_interval`-th step and on the last step, record
///      `(n·dt, T[nx/2])`
/// 3. Return grid, final field and center series
///
/// Note that a sample taken after step `n` is stamped `n·dt`, so the last sample
/// of a 2 s run with `dt = 1 ms` reads `t = 1.999 s`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitSolver;

impl ImplicitSolver {
    /// Create a new implicit solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use heat_rs::solver::{ImplicitSolver, Solver};
    ///
    /// let solver = ImplicitSolver::new();
    /// assert_eq!(solver.name(), "Implicit Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ImplicitSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> HeatResult<SimulationResult> {
        // ====== Step 1: Validation ======

        let (nodes, time_steps) = config.plan(scenario)?;

        // ====== Step 2: Setup ======

        let grid = Grid::uniform(scenario.length, config.dx)?;
        debug_assert_eq!(grid.len(), nodes);

        let left = scenario.boundaries.left;
        let right = scenario.boundaries.right;

        let mut field = DVector::from_element(nodes, scenario.initial_temperature);
        field[0] = left;
        field[nodes - 1] = right;
        let mut next = field.clone();

        let diffusivity = scenario.diffusivity();
        let mesh_ratio = config.mesh_ratio(diffusivity);
        let stencil = TridiagonalStencil::implicit_heat(mesh_ratio);
        let mut sweep = SweepCoefficients::new(nodes);

        let center = grid.center_index();
        let mut center_series =
            CenterSeries::with_capacity(sample_count(time_steps, config.sample_interval));

        log::info!(
            "{}: nx = {}, nt = {}, alpha = {:.6e} m²/s, r = {:.6e}",
            self.name(),
            nodes,
            time_steps,
            diffusivity,
            mesh_ratio
        );
        if mesh_ratio > EXPLICIT_STABILITY_LIMIT {
            log::debug!(
                "mesh ratio {:.3e} exceeds the explicit limit {}; relying on implicit stability",
                mesh_ratio,
                EXPLICIT_STABILITY_LIMIT
            );
        }

        // ====== Step 3: Time marching ======

        for step in 0..time_steps {
            sweep.forward(&stencil, left, field.as_slice());
            sweep.backward(left, right, next.as_mut_slice());
            std::mem::swap(&mut field, &mut next);

            if step % config.sample_interval == 0 || step == time_steps - 1 {
                validate_field(&field, step + 1)?;

                let time = step as f64 * config.dt;
                center_series.record(time, field[center]);
                log::trace!("step {}: T(center) = {} at t = {}", step, field[center], time);
            }
        }

        // ====== Step 4: Build Result ======

        log::info!(
            "{}: finished, T(x = {:.4}) = {:.4}",
            self.name(),
            grid.position(center),
            field[center]
        );

        let mut result = SimulationResult::new(
            grid,
            field,
            center_series,
            diffusivity,
            mesh_ratio,
            time_steps,
            config.total_time,
            scenario.material.conductivity,
        );

        result.add_metadata("solver", self.name());
        result.add_metadata("dx", &config.dx.to_string());
        result.add_metadata("dt", &config.dt.to_string());
        result.add_metadata("total time", &config.total_time.to_string());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("mesh ratio", &mesh_ratio.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Implicit Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Material;
    use crate::solver::sweep::TridiagonalStencil;
    use crate::solver::DirichletBoundaries;
    use approx::assert_abs_diff_eq;

    fn copper_scenario() -> Scenario {
        Scenario::new(
            0.1,
            Material::new(8960.0, 400.0, 400.0),
            DirichletBoundaries::new(200.0, 50.0),
            20.0,
        )
    }

    // ====== Solver Creation Tests ======

    #[test]
    fn test_implicit_solver_default() {
        let solver = ImplicitSolver::default();
        assert_eq!(solver.name(), "Implicit Euler");
    }

    // ====== Reference scenario ======

    #[test]
    fn test_copper_slab_reference_run() {
        let config = SolverConfiguration::new(0.01, 0.001, 2.0);
        let result = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap();

        assert_eq!(result.nodes(), 11);
        assert_eq!(result.time_steps, 2000);
        assert_eq!(result.final_field[0], 200.0);
        assert_eq!(result.final_field[10], 50.0);

        for value in result.final_field.iter() {
            assert!((20.0..=200.0).contains(value));
        }

        let (first_time, _) = result.center_series.first().unwrap();
        let (last_time, _) = result.center_series.last().unwrap();
        assert_eq!(first_time, 0.0);
        assert_abs_diff_eq!(last_time, 1.999, epsilon = 1e-9);
        assert_eq!(result.center_series.len(), 201);
    }

    #[test]
    fn test_metadata_is_recorded() {
        let config = SolverConfiguration::new(0.01, 0.001, 0.1);
        let result = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap();
        assert_eq!(result.metadata("solver"), Some("Implicit Euler"));
        assert_eq!(result.metadata("time steps"), Some("100"));
    }

    // ====== One step reproduces the linear system ======

    #[test]
    fn test_single_step_solves_tridiagonal_system() {
        let scenario = copper_scenario();
        let config = SolverConfiguration::new(0.01, 0.5, 0.5);
        let result = ImplicitSolver::new().solve(&scenario, &config).unwrap();

        let stencil = TridiagonalStencil::implicit_heat(result.mesh_ratio);
        let t = &result.final_field;
        for i in 1..t.len() - 1 {
            let residual = stencil.residual(t[i - 1], t[i], t[i + 1], 20.0);
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-9);
        }
    }

    // ====== Degenerate grid ======

    #[test]
    fn test_two_node_grid() {
        let config = SolverConfiguration::new(0.1, 0.01, 1.0);
        let result = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap();

        assert_eq!(result.nodes(), 2);
        assert_eq!(result.final_field.as_slice(), &[200.0, 50.0]);
        assert_eq!(result.center_index(), 1);
        assert_eq!(result.center_temperature(), 50.0);
    }

    // ====== Invalid input ======

    #[test]
    fn test_rejects_zero_dx() {
        let config = SolverConfiguration::new(0.0, 0.001, 2.0);
        let err = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_rejects_negative_dt() {
        let config = SolverConfiguration::new(0.01, -1.0, 2.0);
        let err = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_rejects_zero_density() {
        let mut scenario = copper_scenario();
        scenario.material.density = 0.0;
        let config = SolverConfiguration::new(0.01, 0.001, 2.0);
        let err = ImplicitSolver::new().solve(&scenario, &config).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_huge_run_is_refused_before_allocation() {
        let config = SolverConfiguration::new(1e-9, 1e-9, 1.0);
        let err = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap_err();
        assert!(err.is_resource_exhaustion());
    }

    // ====== Sampling ======

    #[test]
    fn test_custom_sample_interval() {
        let config = SolverConfiguration::new(0.01, 0.001, 0.1).with_sample_interval(25);
        let result = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap();
        // steps 0, 25, 50, 75 and the final step 99
        assert_eq!(result.center_series.len(), 5);
        assert_abs_diff_eq!(result.center_series.last().unwrap().0, 0.099, epsilon = 1e-12);
    }

    #[test]
    fn test_sampling_every_step() {
        let config = SolverConfiguration::new(0.01, 0.01, 0.1).with_sample_interval(1);
        let result = ImplicitSolver::new().solve(&copper_scenario(), &config).unwrap();
        assert_eq!(result.center_series.len(), 10);
    }
}
