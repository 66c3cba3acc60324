//! Export module for simulation results.
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the export format; each format lives in
//! its own sub-module. Adding a format means adding a file.
//!
//! | Format | Module    |
//! |--------|-----------|
//! | CSV    | [`csv`]   |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use heat_rs::config::SimulationParameters;
//! use heat_rs::output::export::{CsvExporter, Exporter};
//!
//! let result = SimulationParameters::default().solve()?;
//! let exporter = CsvExporter::default();
//!
//! exporter.export_profile(&result, "profile.csv")?;
//! exporter.export_center_series(&result, Some(50), "center.csv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;

pub use csv::{export_series_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata};

use std::path::Path;

use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Parameter `n_points`
///
/// - `None`: every center sample is written
/// - `Some(n)`: uniform downsampling to `n` points, always keeping the first
///   and the last sample
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Writes the final profile: position and temperature columns.
    fn export_profile(&self, result: &SimulationResult, path: impl AsRef<Path>) -> Result<(), Self::Error>;

    /// Writes the center time series: time and temperature columns.
    fn export_center_series(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: impl AsRef<Path>,
    ) -> Result<(), Self::Error>;
}

/// Indices of `n_points` samples spread evenly over `len`, first and last included
pub(crate) fn downsample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n >= 2 && n < len => {
            let last = len - 1;
            let mut indices: Vec<usize> = (0..n)
                .map(|k| ((k as f64 * last as f64) / (n - 1) as f64).round() as usize)
                .collect();
            indices.dedup();
            indices
        }
        Some(1) if len > 0 => vec![len - 1],
        _ => (0..len).collect(),
    }
}
