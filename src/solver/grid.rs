//! Uniform one-dimensional grid
//!
//! The slab `[0, L]` is covered by `nx = floor(L/dx) + 1` nodes evenly spread
//! from `0` to `L` inclusive. When `dx` does not divide `L` the node spacing
//! `L/(nx-1)` differs slightly from `dx`; the scheme keeps using `dx` in the mesh
//! ratio, and a warning is logged.
//!
//! The quotient `L/dx` is snapped to the nearest integer when it is within
//! floating-point noise of it, so that `0.3 / 0.1 = 2.9999999999999996` yields
//! four nodes rather than three.

use std::ops::Range;

use nalgebra::DVector;

use crate::error::{require_positive, HeatError, HeatResult};

/// Relative tolerance used when counting whole steps in an interval
pub(crate) const SNAP_TOLERANCE: f64 = 1e-9;

/// Hard cap on the number of nodes a grid may allocate
pub const MAX_GRID_POINTS: usize = 1 << 27;

/// Number of whole `step`s that fit in `extent`, as a float
///
/// Both arguments must already be finite and positive.
pub(crate) fn whole_steps(extent: f64, step: f64) -> f64 {
    let ratio = extent / step;
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= SNAP_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.floor()
    }
}

/// Node positions of the slab
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    positions: DVector<f64>,
    length: f64,
    step: f64,
}

impl Grid {
    /// Number of nodes `floor(L/dx) + 1` implied by a slab length and grid step
    ///
    /// Fails with `InvalidParameter` for non-positive values or `dx > L`.
    /// The count is returned as a float so that callers can check it against a
    /// budget before allocating.
    pub fn node_count(length: f64, step: f64) -> HeatResult<f64> {
        require_positive("L", length)?;
        require_positive("dx", step)?;

        let cells = whole_steps(length, step);
        if cells < 1.0 {
            return Err(HeatError::invalid(
                "dx",
                step,
                format!("must not exceed the slab length L = {}", length),
            ));
        }

        Ok(cells + 1.0)
    }

    /// Build the uniform grid for a slab of `length` with step `step`
    pub fn uniform(length: f64, step: f64) -> HeatResult<Self> {
        let nodes = Self::node_count(length, step)?;

        if !nodes.is_finite() || nodes > MAX_GRID_POINTS as f64 {
            return Err(HeatError::ResourceExhaustion {
                grid_points: nodes,
                time_steps: 1.0,
                work: nodes,
                limit: MAX_GRID_POINTS as u64,
            });
        }

        Ok(Self::with_nodes(length, step, nodes as usize))
    }

    fn with_nodes(length: f64, step: f64, nodes: usize) -> Self {
        let last = nodes - 1;
        let positions = DVector::from_fn(nodes, |i, _| {
            if i == last {
                length
            } else {
                length * i as f64 / last as f64
            }
        });

        let grid = Self {
            positions,
            length,
            step,
        };

        if !grid.is_exact() {
            log::warn!(
                "dx = {} does not divide L = {}: {} nodes with spacing {:.6e}",
                step,
                length,
                nodes,
                grid.spacing()
            );
        }

        grid
    }

    /// Number of nodes `nx` (always at least 2)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A grid always holds its two boundary nodes
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn positions(&self) -> &DVector<f64> {
        &self.positions
    }

    pub fn position(&self, index: usize) -> f64 {
        self.positions[index]
    }

    /// Slab length L \[m\]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Configured grid step dx \[m\]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Actual distance between neighbouring nodes, `L / (nx - 1)`
    pub fn spacing(&self) -> f64 {
        self.length / (self.len() - 1) as f64
    }

    /// True when the node spacing equals `dx` up to round-off
    pub fn is_exact(&self) -> bool {
        (self.spacing() - self.step).abs() <= SNAP_TOLERANCE * self.step
    }

    /// Index of the midpoint node, `nx / 2`
    pub fn center_index(&self) -> usize {
        self.len() / 2
    }

    /// Indices of the interior nodes
    pub fn interior(&self) -> Range<usize> {
        1..self.len() - 1
    }
}
