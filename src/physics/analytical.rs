//! Closed-form solutions of the 1D heat equation with Dirichlet ends
//!
//! For a slab of length `L` held at `T_left` / `T_right`, starting from a uniform
//! interior temperature `T_initial`:
//!
//! ```text
//! T(x, t) = Ts(x) + Σ_{n≥1} b_n · sin(nπx/L) · exp(-α (nπ/L)² t)
//!
//! Ts(x) = T_left + (T_right - T_left) · x / L
//! b_n   = 2/(nπ) · [ (T_initial - T_left)(1 - (-1)^n) + (T_right - T_left)(-1)^n ]
//! ```
//!
//! The series converges slowly at `t = 0` (Gibbs oscillations at the ends), so it
//! is meant to be evaluated at `t > 0`.

use std::f64::consts::PI;

/// Slab problem with uniform initial interior and fixed end temperatures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticalSlab {
    pub length: f64,
    pub diffusivity: f64,
    pub left: f64,
    pub right: f64,
    pub initial: f64,
}

impl AnalyticalSlab {
    /// Linear steady-state profile Ts(x)
    pub fn steady_profile(&self, x: f64) -> f64 {
        self.left + (self.right - self.left) * x / self.length
    }

    /// Fourier-series solution truncated to `terms` modes
    pub fn transient_profile(&self, x: f64, t: f64, terms: usize) -> f64 {
        let mut value = self.steady_profile(x);

        for n in 1..=terms {
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            let k = n as f64 * PI / self.length;
            let b_n = 2.0 / (n as f64 * PI)
                * ((self.initial - self.left) * (1.0 - sign) + (self.right - self.left) * sign);
            value += b_n * (k * x).sin() * (-self.diffusivity * k * k * t).exp();
        }

        value
    }

    /// Characteristic diffusion time L² / α \[s\]
    pub fn diffusion_time(&self) -> f64 {
        self.length * self.length / self.diffusivity
    }
}
