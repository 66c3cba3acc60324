//! heat-rs: one-dimensional slab heat conduction
//!
//! Computes how temperature evolves across a slab whose two faces are held at
//! fixed temperatures, using an implicit (backward Euler) finite-difference
//! scheme and the Thomas algorithm for the tridiagonal system of each step.
//!
//! # Architecture
//!
//! 1. **Separation of Physics and Numerics**
//!    - [`physics`]: material properties and exact reference solutions
//!    - [`solver`]: grid, sweep, time marching
//!
//! 2. **Outputs are layered on top**
//!    - [`output`]: CSV export, and plots with the `plot` feature
//!    - nothing in the solver performs I/O
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::physics::Material;
//! use heat_rs::solver::{DirichletBoundaries, ImplicitSolver, Scenario, Solver, SolverConfiguration};
//!
//! // 1. Physical problem: 10 cm plate, 200 °C / 50 °C faces, 20 °C inside
//! let scenario = Scenario::new(
//!     0.1,
//!     Material::new(8960.0, 400.0, 400.0),
//!     DirichletBoundaries::new(200.0, 50.0),
//!     20.0,
//! );
//!
//! // 2. Discretization: dx = 1 cm, dt = 1 ms, 2 s simulated
//! let config = SolverConfiguration::new(0.01, 0.001, 2.0);
//!
//! // 3. Run
//! let result = ImplicitSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Outputs
//! assert_eq!(result.nodes(), 11);
//! assert_eq!(result.final_field[0], 200.0);
//! println!("{}", result.summary());
//! # Ok::<(), heat_rs::HeatError>(())
//! ```
//!
//! # Modules
//!
//! - [`config`]: serializable run parameters
//! - [`error`]: [`HeatError`] and [`HeatResult`]
//! - [`physics`]: material and analytical solutions
//! - [`solver`]: numerical solver
//! - [`output`]: export and visualization

pub mod config;
pub mod error;
pub mod output;
pub mod physics;
pub mod solver;

pub use error::{HeatError, HeatResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use heat_rs::prelude::*;
    //! ```
    pub use crate::config::SimulationParameters;
    pub use crate::error::{HeatError, HeatResult};
    pub use crate::physics::Material;
    pub use crate::solver::{
        CenterSeries, DirichletBoundaries, ImplicitSolver, Scenario, SimulationResult, Solver,
        SolverConfiguration,
    };
}
