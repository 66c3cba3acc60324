//! Thomas algorithm (sweep method) for the implicit heat step
//!
//! # Mathematical Background
//!
//! Backward Euler applied to ∂T/∂t = α·∂²T/∂x² on node `i` gives
//!
//! ```text
//! -A·T[i-1] + B·T[i] - C·T[i+1] = F[i]
//!
//! A = C = r,   B = 1 + 2r,   F[i] = T_old[i],   r = α·dt/dx²
//! ```
//!
//! The unknowns are linked through the recurrence `T[i] = α_i·T[i+1] + β_i`.
//! Substituting it into the equation of node `i` gives the forward sweep
//!
//! ```text
//! α_i = C / (B - A·α_{i-1})
//! β_i = (A·β_{i-1} + F[i]) / (B - A·α_{i-1})
//! ```
//!
//! seeded with `α_0 = 0, β_0 = T_left` (the left node is known). The backward
//! substitution then starts from the known right node.
//!
//! Because `B > A + C` the system is strictly diagonally dominant: every
//! denominator is at least `1`, and `0 ≤ α_i < 1`, so round-off does not grow
//! along the sweep.

/// Constant coefficients of one interior row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TridiagonalStencil {
    /// Coupling to the left neighbour (A)
    pub lower: f64,
    /// Diagonal (B)
    pub diagonal: f64,
    /// Coupling to the right neighbour (C)
    pub upper: f64,
}

impl TridiagonalStencil {
    /// Backward-Euler stencil for mesh ratio `r`
    pub fn implicit_heat(mesh_ratio: f64) -> Self {
        Self {
            lower: mesh_ratio,
            diagonal: 1.0 + 2.0 * mesh_ratio,
            upper: mesh_ratio,
        }
    }

    /// `|B| > |A| + |C|`
    pub fn is_diagonally_dominant(&self) -> bool {
        self.diagonal.abs() > self.lower.abs() + self.upper.abs()
    }

    /// Residual of row `i` for the values `(left, center, right)`
    pub fn residual(&self, left: f64, center: f64, right: f64, rhs: f64) -> f64 {
        -self.lower * left + self.diagonal * center - self.upper * right - rhs
    }
}

/// Sweep coefficient buffers `α`, `β`
///
/// Allocated once per run; every call to [`SweepCoefficients::forward`]
/// overwrites all entries that [`SweepCoefficients::backward`] reads.
#[derive(Debug, Clone)]
pub struct SweepCoefficients {
    alpha: Vec<f64>,
    beta: Vec<f64>,
}

impl SweepCoefficients {
    /// Buffers for a grid of `nodes` nodes
    pub fn new(nodes: usize) -> Self {
        Self {
            alpha: vec![0.0; nodes],
            beta: vec![0.0; nodes],
        }
    }

    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    pub fn beta(&self) -> &[f64] {
        &self.beta
    }

    /// Forward elimination over the interior nodes
    ///
    /// `rhs` is indexed like the grid; only `rhs[1..n-1]` is read.
    pub fn forward(&mut self, stencil: &TridiagonalStencil, left: f64, rhs: &[f64]) {
        let n = self.len();
        debug_assert_eq!(rhs.len(), n);

        self.alpha[0] = 0.0;
        self.beta[0] = left;

        for i in 1..n - 1 {
            let denominator = stencil.diagonal - stencil.lower * self.alpha[i - 1];
            self.alpha[i] = stencil.upper / denominator;
            self.beta[i] = (stencil.lower * self.beta[i - 1] + rhs[i]) / denominator;
        }
    }

    /// Backward substitution into `out`, boundary nodes included
    pub fn backward(&self, left: f64, right: f64, out: &mut [f64]) {
        let n = self.len();
        debug_assert_eq!(out.len(), n);

        out[n - 1] = right;
        for i in (1..n - 1).rev() {
            out[i] = self.alpha[i] * out[i + 1] + self.beta[i];
        }
        out[0] = left;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn solve(stencil: &TridiagonalStencil, left: f64, right: f64, rhs: &[f64]) -> Vec<f64> {
        let mut sweep = SweepCoefficients::new(rhs.len());
        let mut out = vec![0.0; rhs.len()];
        sweep.forward(stencil, left, rhs);
        sweep.backward(left, right, &mut out);
        out
    }

    #[test]
    fn test_stencil_is_diagonally_dominant() {
        for r in [1e-6, 0.1, 0.5, 1.0, 1e3, 1e9] {
            assert!(TridiagonalStencil::implicit_heat(r).is_diagonally_dominant());
        }
    }

    #[test]
    fn test_zero_ratio_is_identity() {
        let stencil = TridiagonalStencil::implicit_heat(0.0);
        let rhs = [0.0, 3.0, -1.0, 7.0, 0.0];
        let out = solve(&stencil, 10.0, 20.0, &rhs);
        assert_eq!(out, vec![10.0, 3.0, -1.0, 7.0, 20.0]);
    }

    #[test]
    fn test_solution_satisfies_every_row() {
        let stencil = TridiagonalStencil::implicit_heat(0.8);
        let rhs = [0.0, 20.0, 25.0, 30.0, 35.0, 40.0, 0.0];
        let out = solve(&stencil, 200.0, 50.0, &rhs);

        for i in 1..rhs.len() - 1 {
            let residual = stencil.residual(out[i - 1], out[i], out[i + 1], rhs[i]);
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-10);
        }
        assert_eq!(out[0], 200.0);
        assert_eq!(out[6], 50.0);
    }

    #[test]
    fn test_alpha_stays_below_one() {
        let stencil = TridiagonalStencil::implicit_heat(1e4);
        let mut sweep = SweepCoefficients::new(50);
        sweep.forward(&stencil, 1.0, &[1.0; 50]);
        assert!(sweep.alpha()[1..49].iter().all(|a| (0.0..1.0).contains(a)));
    }

    #[test]
    fn test_two_nodes_touch_only_boundaries() {
        let stencil = TridiagonalStencil::implicit_heat(2.0);
        let out = solve(&stencil, 1.0, 2.0, &[0.0, 0.0]);
        assert_eq!(out, vec![1.0, 2.0]);
    }

    #[test]
    fn test_linear_profile_is_fixed_point() {
        // The discrete Laplacian of a linear profile is zero
        let stencil = TridiagonalStencil::implicit_heat(5.0);
        let rhs: Vec<f64> = (0..11).map(|i| 200.0 - 15.0 * i as f64).collect();
        let out = solve(&stencil, 200.0, 50.0, &rhs);
        for (computed, expected) in out.iter().zip(rhs.iter()) {
            assert_abs_diff_eq!(computed, expected, epsilon = 1e-10);
        }
    }
}
