//! Homogeneous material properties

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, HeatResult};

/// Thermophysical properties of a homogeneous slab
///
/// Properties are constant in space and time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Density ρ \[kg/m³\]
    pub density: f64,
    /// Specific heat c \[J/(kg·K)\]
    pub specific_heat: f64,
    /// Thermal conductivity λ \[W/(m·K)\]
    pub conductivity: f64,
}

impl Material {
    /// Create a material from ρ, c and λ
    ///
    /// Values are not checked here; call [`Material::validate`] (the solver does).
    pub fn new(density: f64, specific_heat: f64, conductivity: f64) -> Self {
        Self {
            density,
            specific_heat,
            conductivity,
        }
    }

    /// Thermal diffusivity α = λ / (ρ·c) \[m²/s\]
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / (self.density * self.specific_heat)
    }

    /// Volumetric heat capacity ρ·c \[J/(m³·K)\]
    pub fn heat_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }

    /// Check that all properties are finite and strictly positive
    pub fn validate(&self) -> HeatResult<()> {
        require_positive("rho", self.density)?;
        require_positive("c", self.specific_heat)?;
        require_positive("lambda", self.conductivity)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diffusivity() {
        let material = Material::new(8960.0, 400.0, 400.0);
        assert_relative_eq!(material.diffusivity(), 1.116_071_428_571_428_6e-4, max_relative = 1e-12);
        assert_relative_eq!(material.heat_capacity(), 3_584_000.0);
    }

    #[test]
    fn test_validate_rejects_zero_density() {
        let err = Material::new(0.0, 400.0, 400.0).validate().unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(err.to_string().contains("rho"));
    }

    #[test]
    fn test_validate_rejects_negative_conductivity() {
        let err = Material::new(1000.0, 400.0, -1.0).validate().unwrap_err();
        assert!(err.to_string().contains("lambda"));
    }
}
