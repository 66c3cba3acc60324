//! Numerical solver trait and configuration
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: stable interface, implemented by every time-marching scheme
//! - `SolverConfiguration`: fields are only ever added, with defaults

use crate::error::{require_positive, HeatError, HeatResult};
use crate::solver::grid::{whole_steps, Grid, MAX_GRID_POINTS};
use crate::solver::{Scenario, SimulationResult};

/// Default center sampling period, in steps
pub const DEFAULT_SAMPLE_INTERVAL: usize = 10;

/// Default ceiling on `nx * nt` node updates for one run
pub const DEFAULT_WORK_LIMIT: u64 = 2_000_000_000;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Discretization of a run (HOW to solve)
///
/// # Examples
///
/// ```rust
/// use heat_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::new(0.01, 0.001, 2.0)
///     .with_sample_interval(100);
///
/// assert_eq!(config.time_steps()?, 2000);
/// # Ok::<(), heat_rs::HeatError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Grid step dx \[m\]
    pub dx: f64,

    /// Time step dt \[s\]
    pub dt: f64,

    /// Simulated time t_final \[s\]
    pub total_time: f64,

    /// The center temperature is recorded every `sample_interval` steps
    /// (and always on the last step)
    pub sample_interval: usize,

    /// Largest admissible `nx * nt`
    pub work_limit: u64,
}

impl SolverConfiguration {
    /// Configuration with the default sampling period and work limit
    pub fn new(dx: f64, dt: f64, total_time: f64) -> Self {
        Self {
            dx,
            dt,
            total_time,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            work_limit: DEFAULT_WORK_LIMIT,
        }
    }

    /// Builder pattern: set sampling period
    pub fn with_sample_interval(mut self, sample_interval: usize) -> Self {
        self.sample_interval = sample_interval;
        self
    }

    /// Builder pattern: set work limit
    pub fn with_work_limit(mut self, work_limit: u64) -> Self {
        self.work_limit = work_limit;
        self
    }

    /// Check the numerical parameters on their own
    pub fn validate(&self) -> HeatResult<()> {
        require_positive("dx", self.dx)?;
        require_positive("dt", self.dt)?;
        require_positive("t_final", self.total_time)?;

        if self.sample_interval == 0 {
            return Err(HeatError::invalid(
                "sample_interval",
                0.0,
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Number of time steps `nt = floor(t_final / dt)`
    ///
    /// A run needs at least one step, so `dt > t_final` is rejected.
    pub fn time_steps(&self) -> HeatResult<usize> {
        self.validate()?;

        let steps = whole_steps(self.total_time, self.dt);
        if steps < 1.0 {
            return Err(HeatError::invalid(
                "dt",
                self.dt,
                format!("must not exceed the simulated time t_final = {}", self.total_time),
            ));
        }
        if steps > self.work_limit as f64 {
            return Err(self.exhausted(1.0, steps));
        }

        Ok(steps as usize)
    }

    /// Validate against a scenario and size the run
    ///
    /// Returns `(nx, nt)`. Fails with `ResourceExhaustion` when the run would
    /// exceed [`work_limit`](Self::work_limit) or [`MAX_GRID_POINTS`], before
    /// anything is allocated.
    pub fn plan(&self, scenario: &Scenario) -> HeatResult<(usize, usize)> {
        scenario.validate()?;
        self.validate()?;

        let nodes = Grid::node_count(scenario.length, self.dx)?;
        let steps = self.time_steps()? as f64;

        let work = nodes * steps;
        if !work.is_finite() || work > self.work_limit as f64 || nodes > MAX_GRID_POINTS as f64 {
            return Err(self.exhausted(nodes, steps));
        }

        Ok((nodes as usize, steps as usize))
    }

    fn exhausted(&self, nodes: f64, steps: f64) -> HeatError {
        HeatError::ResourceExhaustion {
            grid_points: nodes,
            time_steps: steps,
            work: nodes * steps,
            limit: self.work_limit,
        }
    }

    /// Mesh ratio r = α·dt/dx² for a material of diffusivity `alpha`
    pub fn mesh_ratio(&self, alpha: f64) -> f64 {
        alpha * self.dt / (self.dx * self.dx)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Time-marching scheme for the slab problem
///
/// Implementors are stateless: `solve` is a pure function of its arguments and
/// may be called any number of times, from any thread.
pub trait Solver: Send + Sync {
    /// Run the scheme for `scenario` with discretization `config`
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for out-of-range inputs (nothing is computed)
    /// - `ResourceExhaustion` when `nx * nt` exceeds the configured limit
    /// - `NumericalInstability` if non-finite temperatures appear
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> HeatResult<SimulationResult>;

    /// Display name
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Material;
    use crate::solver::DirichletBoundaries;

    fn scenario() -> Scenario {
        Scenario::new(
            0.1,
            Material::new(8960.0, 400.0, 400.0),
            DirichletBoundaries::new(200.0, 50.0),
            20.0,
        )
    }

    #[test]
    fn test_time_steps() {
        assert_eq!(SolverConfiguration::new(0.01, 0.001, 2.0).time_steps().unwrap(), 2000);
        assert_eq!(SolverConfiguration::new(0.01, 0.3, 1.0).time_steps().unwrap(), 3);
    }

    #[test]
    fn test_dt_larger_than_total_time() {
        let err = SolverConfiguration::new(0.01, 3.0, 2.0).time_steps().unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_zero_sample_interval() {
        let config = SolverConfiguration::new(0.01, 0.001, 2.0).with_sample_interval(0);
        assert!(config.validate().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_plan() {
        let config = SolverConfiguration::new(0.01, 0.001, 2.0);
        assert_eq!(config.plan(&scenario()).unwrap(), (11, 2000));
    }

    #[test]
    fn test_plan_rejects_oversized_run() {
        let config = SolverConfiguration::new(1e-7, 1e-6, 10.0);
        let err = config.plan(&scenario()).unwrap_err();
        assert!(err.is_resource_exhaustion());
    }

    #[test]
    fn test_plan_respects_custom_limit() {
        let config = SolverConfiguration::new(0.01, 0.001, 2.0).with_work_limit(1000);
        assert!(config.plan(&scenario()).unwrap_err().is_resource_exhaustion());
    }

    #[test]
    fn test_invalid_input_wins_over_size() {
        let config = SolverConfiguration::new(0.0, 1e-9, 1e9);
        assert!(config.plan(&scenario()).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_mesh_ratio() {
        let config = SolverConfiguration::new(0.01, 0.001, 2.0);
        let alpha = scenario().diffusivity();
        approx::assert_relative_eq!(config.mesh_ratio(alpha), alpha * 10.0, max_relative = 1e-12);
    }
}
