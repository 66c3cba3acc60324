//! Error types for the heat solver
//!
//! Every fallible operation of the crate returns [`HeatResult`]. Invalid input is
//! always reported before any computation starts, so an `Err` never comes with a
//! partially filled result.

use thiserror::Error;

/// Failure conditions of a simulation run
#[derive(Error, Debug)]
pub enum HeatError {
    /// A parameter is out of its admissible range (non-positive, non-finite,
    /// or a grid step larger than the slab).
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },

    /// The discretization implies more work or memory than the run is allowed
    /// to use. The cost of a run is `grid_points * time_steps` node updates.
    #[error(
        "Resource exhaustion: {grid_points:.0} nodes x {time_steps:.0} steps \
         = {work:.3e} node updates (limit {limit})"
    )]
    ResourceExhaustion {
        grid_points: f64,
        time_steps: f64,
        work: f64,
        limit: u64,
    },

    /// Non-finite temperatures appeared during the march.
    #[error("Numerical instability at step {step}: {message}")]
    NumericalInstability { step: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HeatError {
    /// Shorthand for [`HeatError::InvalidParameter`]
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        HeatError::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// True for input-validation failures
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, HeatError::InvalidParameter { .. })
    }

    /// True when the run was refused because of its size
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, HeatError::ResourceExhaustion { .. })
    }
}

pub type HeatResult<T> = Result<T, HeatError>;

/// Reject non-finite or non-positive values
pub(crate) fn require_positive(name: &'static str, value: f64) -> HeatResult<()> {
    if !value.is_finite() {
        return Err(HeatError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(HeatError::invalid(name, value, "must be strictly positive"));
    }
    Ok(())
}

/// Reject NaN and infinities (temperatures may be any sign)
pub(crate) fn require_finite(name: &'static str, value: f64) -> HeatResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HeatError::invalid(name, value, "must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("dx", 0.01).is_ok());

        let err = require_positive("dx", 0.0).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("`dx`"));

        assert!(require_positive("dt", -1.0).unwrap_err().is_invalid_parameter());
        assert!(require_positive("rho", f64::NAN).unwrap_err().is_invalid_parameter());
        assert!(require_positive("rho", f64::INFINITY).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_require_finite_accepts_negative_temperatures() {
        assert!(require_finite("T_left", -40.0).is_ok());
        assert!(require_finite("T_left", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_resource_exhaustion_message() {
        let err = HeatError::ResourceExhaustion {
            grid_points: 1.0e6,
            time_steps: 1.0e6,
            work: 1.0e12,
            limit: 2_000_000_000,
        };
        assert!(err.is_resource_exhaustion());
        assert!(!err.is_invalid_parameter());
        assert!(err.to_string().contains("limit 2000000000"));
    }
}
