//! Outputs of a simulation run

use std::collections::HashMap;
use std::fmt;

use nalgebra::DVector;

use crate::solver::Grid;

// =================================================================================================
// Center series
// =================================================================================================

/// Midpoint temperature sampled over time
///
/// Append-only; times are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterSeries {
    samples: Vec<(f64, f64)>,
}

impl CenterSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a `(time, temperature)` sample
    pub(crate) fn record(&mut self, time: f64, temperature: f64) {
        debug_assert!(
            self.samples.last().is_none_or(|(last, _)| *last < time),
            "center samples must be strictly increasing in time"
        );
        self.samples.push((time, temperature));
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(time, temperature)` pairs
    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|(t, _)| *t).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.samples.iter().map(|(_, value)| *value).collect()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.samples.last().copied()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Final state and history of a run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Node positions
    pub grid: Grid,

    /// Temperature at every node after the last step \[°C\]
    pub final_field: DVector<f64>,

    /// Sampled midpoint temperature
    pub center_series: CenterSeries,

    /// α = λ/(ρ·c) \[m²/s\]
    pub diffusivity: f64,

    /// r = α·dt/dx²
    pub mesh_ratio: f64,

    /// Number of steps taken, nt
    pub time_steps: usize,

    /// Configured simulated time t_final \[s\]
    pub total_time: f64,

    /// Material conductivity λ, kept for reporting \[W/(m·K)\]
    pub conductivity: f64,

    metadata: HashMap<String, String>,
}

impl SimulationResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        grid: Grid,
        final_field: DVector<f64>,
        center_series: CenterSeries,
        diffusivity: f64,
        mesh_ratio: f64,
        time_steps: usize,
        total_time: f64,
        conductivity: f64,
    ) -> Self {
        Self {
            grid,
            final_field,
            center_series,
            diffusivity,
            mesh_ratio,
            time_steps,
            total_time,
            conductivity,
            metadata: HashMap::new(),
        }
    }

    /// Attach a diagnostic key/value pair
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Number of grid nodes, nx
    pub fn nodes(&self) -> usize {
        self.grid.len()
    }

    /// Final profile as `(position, temperature)` pairs
    pub fn profile(&self) -> Vec<(f64, f64)> {
        self.grid
            .positions()
            .iter()
            .zip(self.final_field.iter())
            .map(|(x, value)| (*x, *value))
            .collect()
    }

    pub fn center_index(&self) -> usize {
        self.grid.center_index()
    }

    pub fn center_position(&self) -> f64 {
        self.grid.position(self.center_index())
    }

    /// Final temperature at the center node
    pub fn center_temperature(&self) -> f64 {
        self.final_field[self.center_index()]
    }

    /// Scalars for display
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            conductivity: self.conductivity,
            diffusivity: self.diffusivity,
            mesh_ratio: self.mesh_ratio,
            nodes: self.nodes(),
            time_steps: self.time_steps,
            center_position: self.center_position(),
            center_temperature: self.center_temperature(),
            total_time: self.total_time,
        }
    }
}

// =================================================================================================
// Summary
// =================================================================================================

/// Headline numbers of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub conductivity: f64,
    pub diffusivity: f64,
    pub mesh_ratio: f64,
    pub nodes: usize,
    pub time_steps: usize,
    pub center_position: f64,
    pub center_temperature: f64,
    pub total_time: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation results:")?;
        writeln!(f, "Thermal conductivity λ: {} W/(m·K)", self.conductivity)?;
        writeln!(f, "Thermal diffusivity α: {:.6} m²/s", self.diffusivity)?;
        writeln!(f, "Mesh ratio r: {:.6}", self.mesh_ratio)?;
        writeln!(f, "Spatial nodes: {}", self.nodes)?;
        writeln!(f, "Time steps: {}", self.time_steps)?;
        writeln!(
            f,
            "Center temperature (x = {:.4} m): {:.4} °C",
            self.center_position, self.center_temperature
        )?;
        write!(f, "Simulated time: {} s", self.total_time)
    }
}
