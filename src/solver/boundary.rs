//! Fixed-temperature (Dirichlet) boundaries of the slab
//!
//! Only the two ends of a one-dimensional domain exist, so the boundary set is
//! a pair of temperatures. The solver writes these values into the first and
//! last node at the end of every step, which keeps them exact (no round-off
//! from the sweep ever reaches them).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, HeatResult};

/// End temperatures of the slab \[°C\]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirichletBoundaries {
    /// Temperature held at x = 0
    pub left: f64,
    /// Temperature held at x = L
    pub right: f64,
}

impl DirichletBoundaries {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Same temperature on both ends
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn validate(&self) -> HeatResult<()> {
        require_finite("T_left", self.left)?;
        require_finite("T_right", self.right)?;
        Ok(())
    }

    /// Smallest and largest boundary temperature
    pub fn range(&self) -> (f64, f64) {
        (self.left.min(self.right), self.left.max(self.right))
    }

    /// Temperature drop across the slab, `left - right`
    pub fn temperature_drop(&self) -> f64 {
        self.left - self.right
    }
}

impl fmt::Display for DirichletBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T(0) = {} °C, T(L) = {} °C", self.left, self.right)
    }
}
