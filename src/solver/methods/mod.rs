//! Time-marching schemes
//!
//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`ImplicitSolver`]**: backward Euler in time, second-order central
//!   differences in space, one Thomas sweep per step
//!   - Order: O(dt + dx²)
//!   - Cost: O(nx) per step, O(nx · nt) per run
//!   - Stability: unconditional (any mesh ratio r > 0)
//!
//! An explicit forward-time scheme would need `r ≤ 1/2`, i.e.
//! `dt ≤ dx² / (2α)`, which for metals on millimetre grids means microsecond
//! steps. The implicit scheme trades one linear solve per step for the freedom
//! to pick `dt` by accuracy alone.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::physics::Material;
//! use heat_rs::solver::{DirichletBoundaries, ImplicitSolver, Scenario, Solver, SolverConfiguration};
//!
//! let scenario = Scenario::new(
//!     0.1,
//!     Material::new(8960.0, 400.0, 400.0),
//!     DirichletBoundaries::new(200.0, 50.0),
//!     20.0,
//! );
//!
//! // r ≈ 56: far beyond the explicit limit, still stable
//! let config = SolverConfiguration::new(0.01, 50.0, 5000.0);
//! let result = ImplicitSolver::new().solve(&scenario, &config)?;
//!
//! assert!((result.center_temperature() - 125.0).abs() < 1e-6);
//! # Ok::<(), heat_rs::HeatError>(())
//! ```

mod implicit;

pub use implicit::ImplicitSolver;
