//! Numerical solver
//!
//! This module turns a physical [`Scenario`] into temperatures by marching the
//! discretized heat equation in time.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Slab length and material
//!    - Dirichlet boundaries and initial temperature
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Grid step `dx`, time step `dt`, simulated time `t_final`
//!    - Center sampling period and work limit
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Stateless: a pure function of scenario and configuration
//!    - Returns a [`SimulationResult`]
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver` trait and `SolverConfiguration`
//! - **`boundary`**: `DirichletBoundaries`
//! - **`scenario`**: `Scenario`
//! - **`grid`**: uniform node layout
//! - **`sweep`**: Thomas algorithm buffers and stencil
//! - **`result`**: `SimulationResult`, `CenterSeries`, `RunSummary`
//! - **`methods`**: `ImplicitSolver`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌──────────────────────┐
//! │ Scenario        │   │ Solver Configuration │
//! │ (slab + bounds) │   │ (dx, dt, t_final)    │
//! └────────┬────────┘   └──────────┬───────────┘
//!          └───────────┬───────────┘
//!             ┌────────▼────────┐
//!             │ ImplicitSolver  │ ← forward sweep + back substitution, nt times
//!             └────────┬────────┘
//!             ┌────────▼────────────┐
//!             │ SimulationResult    │ ← grid, final field, center series
//!             └─────────────────────┘
//! ```
//!
//! # Cost
//!
//! A run performs `nx · nt` node updates and holds `O(nx)` memory. Runs whose
//! size exceeds [`SolverConfiguration::work_limit`] are refused with
//! `ResourceExhaustion` before anything is allocated; callers that need longer
//! runs raise the limit explicitly.
//!
//! # Error Handling
//!
//! ```rust
//! use heat_rs::physics::Material;
//! use heat_rs::solver::{DirichletBoundaries, Scenario};
//!
//! let scenario = Scenario::new(
//!     0.1,
//!     Material::new(8960.0, 400.0, 400.0),
//!     DirichletBoundaries::new(200.0, 50.0),
//!     20.0,
//! );
//!
//! match scenario.solve(0.0, 0.001, 2.0) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(e.is_invalid_parameter()),
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod grid;
mod methods;
mod result;
mod scenario;
pub mod sweep;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Solver, SolverConfiguration, DEFAULT_SAMPLE_INTERVAL, DEFAULT_WORK_LIMIT};

pub use boundary::DirichletBoundaries;
pub use grid::{Grid, MAX_GRID_POINTS};
pub use result::{CenterSeries, RunSummary, SimulationResult};
pub use scenario::Scenario;

pub use methods::ImplicitSolver;

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

use crate::error::{HeatError, HeatResult};

/// Number of center samples a run of `time_steps` steps records
///
/// Steps `0, k, 2k, …` plus the last step when it is not already one of them.
pub fn sample_count(time_steps: usize, sample_interval: usize) -> usize {
    if time_steps == 0 {
        return 0;
    }
    let periodic = time_steps.div_ceil(sample_interval);
    if (time_steps - 1) % sample_interval == 0 {
        periodic
    } else {
        periodic + 1
    }
}

/// Check a temperature field for NaN or infinite values
///
/// Finite inputs cannot produce them (every sweep denominator is ≥ 1), so a hit
/// means overflow from extreme temperatures.
pub(crate) fn validate_field(field: &DVector<f64>, step: usize) -> HeatResult<()> {
    if let Some(index) = field.iter().position(|value| !value.is_finite()) {
        return Err(HeatError::NumericalInstability {
            step,
            message: format!("non-finite temperature {} at node {}", field[index], index),
        });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
