//! Simulation scenario definition
//!
//! A scenario is the physical problem: a slab of given length and material,
//! its end temperatures and its initial interior temperature. It says nothing
//! about grid or time step (see [`SolverConfiguration`]).

use crate::error::{require_finite, require_positive, HeatResult};
use crate::physics::{AnalyticalSlab, Material};
use crate::solver::boundary::DirichletBoundaries;
use crate::solver::methods::ImplicitSolver;
use crate::solver::{SimulationResult, Solver, SolverConfiguration};

/// Simulation scenario (WHAT to solve)
///
/// The same scenario can be solved repeatedly with different discretizations.
///
/// # Example
///
/// ```rust
/// use heat_rs::physics::Material;
/// use heat_rs::solver::{DirichletBoundaries, Scenario};
///
/// let scenario = Scenario::new(
///     0.1,
///     Material::new(8960.0, 400.0, 400.0),
///     DirichletBoundaries::new(200.0, 50.0),
///     20.0,
/// );
///
/// let result = scenario.solve(0.01, 0.001, 2.0)?;
/// assert_eq!(result.grid.len(), 11);
/// # Ok::<(), heat_rs::HeatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Slab thickness L \[m\]
    pub length: f64,

    /// Material filling the slab
    pub material: Material,

    /// Fixed end temperatures
    pub boundaries: DirichletBoundaries,

    /// Uniform interior temperature at t = 0 \[°C\]
    pub initial_temperature: f64,
}

impl Scenario {
    pub fn new(
        length: f64,
        material: Material,
        boundaries: DirichletBoundaries,
        initial_temperature: f64,
    ) -> Self {
        Self {
            length,
            material,
            boundaries,
            initial_temperature,
        }
    }

    /// Verify the physical parameters
    pub fn validate(&self) -> HeatResult<()> {
        require_positive("L", self.length)?;
        self.material.validate()?;
        self.boundaries.validate()?;
        require_finite("T_initial", self.initial_temperature)?;
        Ok(())
    }

    /// Thermal diffusivity of the slab material \[m²/s\]
    pub fn diffusivity(&self) -> f64 {
        self.material.diffusivity()
    }

    /// Lowest and highest temperature present at t = 0
    ///
    /// By the maximum principle the field never leaves this interval.
    pub fn temperature_bounds(&self) -> (f64, f64) {
        let (low, high) = self.boundaries.range();
        (
            low.min(self.initial_temperature),
            high.max(self.initial_temperature),
        )
    }

    /// Closed-form reference for this scenario
    pub fn analytical(&self) -> AnalyticalSlab {
        AnalyticalSlab {
            length: self.length,
            diffusivity: self.diffusivity(),
            left: self.boundaries.left,
            right: self.boundaries.right,
            initial: self.initial_temperature,
        }
    }

    /// Solve with the implicit scheme for the given grid step, time step and
    /// simulated time, sampling the center every 10th step
    pub fn solve(&self, dx: f64, dt: f64, total_time: f64) -> HeatResult<SimulationResult> {
        let config = SolverConfiguration::new(dx, dt, total_time);
        ImplicitSolver::new().solve(self, &config)
    }
}

// ================================================================================================
// Tests
// ================================================================================================
