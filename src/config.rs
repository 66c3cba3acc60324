//! Run parameters as a single serializable value
//!
//! [`SimulationParameters`] is the flat input record a front end hands over:
//! the ten scalars of a run plus the optional sampling period. It round-trips
//! through JSON and splits into the [`Scenario`] / [`SolverConfiguration`] pair
//! the solver works with.
//!
//! ```json
//! {
//!   "length": 0.1,
//!   "left_temperature": 200.0,
//!   "right_temperature": 50.0,
//!   "initial_temperature": 20.0,
//!   "density": 8960.0,
//!   "specific_heat": 400.0,
//!   "conductivity": 400.0,
//!   "dx": 0.01,
//!   "dt": 0.001,
//!   "total_time": 2.0
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HeatResult;
use crate::physics::Material;
use crate::solver::{
    DirichletBoundaries, ImplicitSolver, Scenario, SimulationResult, Solver, SolverConfiguration,
    DEFAULT_SAMPLE_INTERVAL, DEFAULT_WORK_LIMIT,
};

/// All inputs of one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Slab length L \[m\]
    #[serde(alias = "L")]
    pub length: f64,
    /// T_left \[°C\]
    pub left_temperature: f64,
    /// T_right \[°C\]
    pub right_temperature: f64,
    /// T_initial \[°C\]
    pub initial_temperature: f64,
    /// ρ \[kg/m³\]
    #[serde(alias = "rho")]
    pub density: f64,
    /// c \[J/(kg·K)\]
    #[serde(alias = "c")]
    pub specific_heat: f64,
    /// λ \[W/(m·K)\]
    #[serde(alias = "lambda")]
    pub conductivity: f64,
    /// Grid step \[m\]
    pub dx: f64,
    /// Time step \[s\]
    pub dt: f64,
    /// Simulated time \[s\]
    #[serde(alias = "t_final")]
    pub total_time: f64,
    /// Center sampling period in steps
    #[serde(default = "default_sample_interval")]
    pub sample_interval: usize,
}

fn default_sample_interval() -> usize {
    DEFAULT_SAMPLE_INTERVAL
}

impl Default for SimulationParameters {
    /// 10 cm copper-like plate between 200 °C and 50 °C, starting at 20 °C
    fn default() -> Self {
        Self {
            length: 0.1,
            left_temperature: 200.0,
            right_temperature: 50.0,
            initial_temperature: 20.0,
            density: 8960.0,
            specific_heat: 400.0,
            conductivity: 400.0,
            dx: 0.01,
            dt: 0.001,
            total_time: 2.0,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

impl SimulationParameters {
    /// Parse from a JSON document
    pub fn from_json_str(json: &str) -> HeatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> HeatResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> HeatResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Physical part of the parameters
    pub fn scenario(&self) -> Scenario {
        Scenario::new(
            self.length,
            Material::new(self.density, self.specific_heat, self.conductivity),
            DirichletBoundaries::new(self.left_temperature, self.right_temperature),
            self.initial_temperature,
        )
    }

    /// Numerical part of the parameters
    pub fn configuration(&self) -> SolverConfiguration {
        SolverConfiguration::new(self.dx, self.dt, self.total_time)
            .with_sample_interval(self.sample_interval)
            .with_work_limit(DEFAULT_WORK_LIMIT)
    }

    /// Check every parameter and the size of the run
    pub fn validate(&self) -> HeatResult<()> {
        self.configuration().plan(&self.scenario()).map(|_| ())
    }

    /// Run with [`ImplicitSolver`]
    pub fn solve(&self) -> HeatResult<SimulationResult> {
        ImplicitSolver::new().solve(&self.scenario(), &self.configuration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let params = SimulationParameters::default();
        let json = params.to_json_string().unwrap();
        assert_eq!(SimulationParameters::from_json_str(&json).unwrap(), params);
    }

    #[test]
    fn test_short_names_and_default_interval() {
        let json = r#"{
            "L": 0.2, "left_temperature": 100.0, "right_temperature": 0.0,
            "initial_temperature": 0.0, "rho": 7800.0, "c": 460.0, "lambda": 45.0,
            "dx": 0.01, "dt": 0.5, "t_final": 60.0
        }"#;
        let params = SimulationParameters::from_json_str(json).unwrap();
        assert_eq!(params.length, 0.2);
        assert_eq!(params.density, 7800.0);
        assert_eq!(params.total_time, 60.0);
        assert_eq!(params.sample_interval, 10);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let err = SimulationParameters::from_json_str(r#"{ "length": 0.1 }"#).unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SimulationParameters::default().to_json_string().unwrap()).unwrap();

        let params = SimulationParameters::from_json_file(file.path()).unwrap();
        assert_eq!(params.dx, 0.01);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationParameters::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_split_into_scenario_and_configuration() {
        let params = SimulationParameters::default();
        let scenario = params.scenario();
        let config = params.configuration();

        assert_eq!(scenario.boundaries.left, 200.0);
        assert_eq!(scenario.material.conductivity, 400.0);
        assert_eq!(config.dt, 0.001);
        assert_eq!(config.sample_interval, 10);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = SimulationParameters {
            dt: -1.0,
            ..Default::default()
        };
        assert!(params.validate().unwrap_err().is_invalid_parameter());
        assert!(params.solve().unwrap_err().is_invalid_parameter());
    }
}
