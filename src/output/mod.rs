//! Output module for simulation results
//!
//! - **Export**: CSV files for external analysis
//! - **Visualization**: PNG/SVG plots using plotters (feature `plot`)
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── export/             ← Data export
//! │   ├── mod.rs          ← Exporter trait
//! │   └── csv.rs
//! └── visualization/      ← Plots (feature `plot`)
//!     ├── config.rs
//!     ├── profile.rs
//!     └── history.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use heat_rs::config::SimulationParameters;
//! use heat_rs::output::export::{CsvExporter, Exporter};
//!
//! let result = SimulationParameters::default().solve()?;
//! CsvExporter::with_run_metadata(&result).export_profile(&result, "profile.csv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Both sub-modules read from a [`SimulationResult`](crate::solver::SimulationResult)
//! and never touch the solver state.

pub mod export;

#[cfg(feature = "plot")]
pub mod visualization;
