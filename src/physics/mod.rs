//! Physical description of the slab
//!
//! This module holds everything that describes the *material* and the exact
//! solutions of the continuous problem, independently of any numerical method:
//!
//! - [`Material`]: density, specific heat and conductivity, from which the
//!   thermal diffusivity α = λ / (ρ·c) follows
//! - [`analytical`]: closed-form reference solutions of the one-dimensional heat
//!   equation with fixed end temperatures
//!
//! # Architecture
//!
//! Physics is kept separate from numerics:
//! - the physics says **what** diffuses and how fast (α)
//! - the solver decides **how** the equation ∂T/∂t = α·∂²T/∂x² is discretized
//!
//! # Example
//!
//! ```rust
//! use heat_rs::physics::Material;
//!
//! let copper = Material::new(8960.0, 400.0, 400.0);
//! assert!((copper.diffusivity() - 400.0 / (8960.0 * 400.0)).abs() < 1e-15);
//! ```

pub mod analytical;
mod material;

pub use analytical::AnalyticalSlab;
pub use material::Material;
