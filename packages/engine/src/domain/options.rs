//! Simulation tunables
//!
//! Every field is optional in JSON (camelCase keys); missing keys take the
//! defaults below. Unknown keys are rejected so typos do not silently fall
//! back to a default.

use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

use super::errors::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FluidOptions {
    /// Number of particles created at startup
    pub particle_number: u32,
    /// Constant acceleration applied every tick
    pub gravity: Vec2,
    /// Interaction radius for viscosity and density
    pub radius: f32,
    /// Distance at which a boundary pushes back
    pub collision_radius: f32,
    pub rest_density: f32,
    pub linear_viscosity: f32,
    pub quadratic_viscosity: f32,
    pub stiffness: f32,
    pub near_stiffness: f32,
    /// Gain of the boundary penetration correction
    pub collision_softness: f32,
    /// Center of the initial particle block
    pub spawn_origin: Vec2,
    /// Lattice spacing of the initial block, `radius / 2` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_spacing: Option<f32>,
}

impl Default for FluidOptions {
    fn default() -> Self {
        Self {
            particle_number: 10,
            gravity: Vec2::new(0.0, 9.0),
            radius: 2.0,
            collision_radius: 0.2,
            rest_density: 30.0,
            linear_viscosity: 3.0,
            quadratic_viscosity: 5.0,
            stiffness: 0.7,
            near_stiffness: 0.4,
            collision_softness: 0.1,
            spawn_origin: Vec2::new(100.0, 100.0),
            spawn_spacing: None,
        }
    }
}

impl FluidOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: FluidOptions = serde_json::from_str(json)?;
        Ok(options)
    }

    /// Effective configuration as JSON (spacing resolved).
    pub fn to_json(&self) -> String {
        let mut out = self.clone();
        out.spawn_spacing = Some(self.effective_spawn_spacing());
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn effective_spawn_spacing(&self) -> f32 {
        self.spawn_spacing.unwrap_or(self.radius * 0.5)
    }

    /// Checks every tunable; `cell_width` bounds the interaction radius.
    pub fn validate(&self, cell_width: f32) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid("radius", self.radius, "must be finite and > 0"));
        }
        if self.radius > cell_width {
            return Err(ConfigError::RadiusExceedsCell {
                radius: self.radius,
                cell_width,
            });
        }
        if !self.gravity.is_finite() {
            let bad = if self.gravity.x.is_finite() { self.gravity.y } else { self.gravity.x };
            return Err(invalid("gravity", bad, "must be finite"));
        }

        let non_negative = [
            ("collisionRadius", self.collision_radius),
            ("restDensity", self.rest_density),
            ("linearViscosity", self.linear_viscosity),
            ("quadraticViscosity", self.quadratic_viscosity),
            ("stiffness", self.stiffness),
            ("nearStiffness", self.near_stiffness),
            ("collisionSoftness", self.collision_softness),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, value, "must be finite and >= 0"));
            }
        }

        if !self.spawn_origin.is_finite() {
            let bad = if self.spawn_origin.x.is_finite() { self.spawn_origin.y } else { self.spawn_origin.x };
            return Err(invalid("spawnOrigin", bad, "must be finite"));
        }
        let spacing = self.effective_spawn_spacing();
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(invalid("spawnSpacing", spacing, "must be finite and > 0"));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: f32, reason: &'static str) -> ConfigError {
    ConfigError::InvalidOption { name, value, reason }
}
