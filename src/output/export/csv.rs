//! CSV export of simulation results
//!
//! Writes the final temperature profile and the center time series to
//! comma-separated files readable by spreadsheets, pandas or gnuplot.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,no_run
//! use heat_rs::output::export::export_series_csv;
//!
//! let time = vec![0.0, 1.0, 2.0];
//! let temperature = vec![20.0, 24.5, 31.0];
//!
//! export_series_csv(&time, &temperature, "center.csv", None)?;
//! # Ok::<(), heat_rs::output::export::CsvError>(())
//! ```
//!
//! **Output** (`center.csv`):
//! ```csv
//! Time (s),Temperature (°C)
//! 0.000000,20.000000
//! 1.000000,24.500000
//! 2.000000,31.000000
//! ```
//!
//! ## With Metadata
//!
//! ```csv
//! # Heat Conduction Simulation Data
//! # Generated: 2026-10-17T09:30:00+00:00
//! # Solver: Implicit Euler
//! # Nodes: 11
//! # dx: 0.01 m
//! # dt: 0.001 s
//! #
//! Position (m),Temperature (°C)
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use super::{downsample_indices, Exporter};
use crate::solver::SimulationResult;

// =============================================================================
// Errors
// =============================================================================

/// Failures of CSV export
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Empty data: series must not be empty")]
    EmptyData,

    #[error("Data length mismatch: {x_len} abscissae versus {y_len} values")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Invalid data: NaN or Inf detected in {column}")]
    NonFinite { column: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use heat_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     precision: 10,
///     include_metadata: true,
///     ..Default::default()
/// };
/// assert_eq!(config.delimiter, ',');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the abscissa column; `None` picks "Time (s)" or "Position (m)"
    pub x_header: Option<String>,

    /// Header of the temperature column
    pub temperature_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            x_header: None,
            temperature_header: "Temperature (°C)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter, comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    pub solver_name: Option<String>,
    pub nodes: Option<usize>,
    pub dx: Option<f64>,
    pub dt: Option<f64>,
    pub total_time: Option<f64>,
    pub time_steps: Option<usize>,
    pub diffusivity: Option<f64>,
    pub mesh_ratio: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Collect what a result knows about its run
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            solver_name: result.metadata("solver").map(str::to_string),
            nodes: Some(result.nodes()),
            dx: Some(result.grid.step()),
            dt: result.metadata("dt").and_then(|s| s.parse().ok()),
            total_time: Some(result.total_time),
            time_steps: Some(result.time_steps),
            diffusivity: Some(result.diffusivity),
            mesh_ratio: Some(result.mesh_ratio),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header(out: &mut impl Write, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(out, "# Heat Conduction Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(nodes) = metadata.nodes {
        writeln!(out, "# Nodes: {}", nodes)?;
    }
    if let Some(dx) = metadata.dx {
        writeln!(out, "# dx: {} m", dx)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# dt: {} s", dt)?;
    }
    if let Some(total_time) = metadata.total_time {
        writeln!(out, "# Total Time: {} s", total_time)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", time_steps)?;
    }
    if let Some(alpha) = metadata.diffusivity {
        writeln!(out, "# Diffusivity: {:e} m2/s", alpha)?;
    }
    if let Some(r) = metadata.mesh_ratio {
        writeln!(out, "# Mesh Ratio: {}", r)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn write_series(
    out: &mut impl Write,
    x_header: &str,
    xs: &[f64],
    temperatures: &[f64],
    config: &CsvConfig,
) -> Result<(), CsvError> {
    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(out, metadata)?;
        }
    }

    writeln!(
        out,
        "{}{}{}",
        config.x_header.as_deref().unwrap_or(x_header),
        config.delimiter,
        config.temperature_header
    )?;

    for (x, value) in xs.iter().zip(temperatures.iter()) {
        writeln!(
            out,
            "{}{}{}",
            format_number(*x, config),
            config.delimiter,
            format_number(*value, config)
        )?;
    }

    Ok(())
}

fn check_series(xs: &[f64], temperatures: &[f64]) -> Result<(), CsvError> {
    if xs.is_empty() || temperatures.is_empty() {
        return Err(CsvError::EmptyData);
    }
    if xs.len() != temperatures.len() {
        return Err(CsvError::LengthMismatch {
            x_len: xs.len(),
            y_len: temperatures.len(),
        });
    }
    if xs.iter().any(|x| !x.is_finite()) {
        return Err(CsvError::NonFinite { column: "abscissa" });
    }
    if temperatures.iter().any(|t| !t.is_finite()) {
        return Err(CsvError::NonFinite { column: "temperature" });
    }
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a `(time, temperature)` series to CSV
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_series_csv(
    times: &[f64],
    temperatures: &[f64],
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    check_series(times, temperatures)?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut out = BufWriter::new(File::create(output_path)?);
    write_series(&mut out, "Time (s)", times, temperatures, configuration)?;
    out.flush()?;
    Ok(())
}

/// [`Exporter`] writing CSV files
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Exporter that writes the run metadata as header comments
    pub fn with_run_metadata(result: &SimulationResult) -> Self {
        Self::new(CsvConfig::default().with_metadata(CsvMetadata::from_result(result)))
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_profile(&self, result: &SimulationResult, path: impl AsRef<Path>) -> Result<(), CsvError> {
        let positions = result.grid.positions().as_slice();
        let temperatures = result.final_field.as_slice();
        check_series(positions, temperatures)?;

        let mut out = BufWriter::new(File::create(path)?);
        write_series(&mut out, "Position (m)", positions, temperatures, &self.config)?;
        out.flush()?;
        Ok(())
    }

    fn export_center_series(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: impl AsRef<Path>,
    ) -> Result<(), CsvError> {
        let samples = result.center_series.samples();
        let indices = downsample_indices(samples.len(), n_points);

        let times: Vec<f64> = indices.iter().map(|&i| samples[i].0).collect();
        let temperatures: Vec<f64> = indices.iter().map(|&i| samples[i].1).collect();

        export_series_csv(&times, &temperatures, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
