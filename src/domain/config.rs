use serde::Deserialize;
use snafu::ResultExt;

use super::error::{BridgeResult, ConfigParseErr, InvalidConfigErr};

pub const DEFAULT_GRAVITY_X: f32 = 0.0;
pub const DEFAULT_GRAVITY_Y: f32 = 50.0;
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;
pub const DEFAULT_WALL_THICKNESS: f32 = 1.5;
pub const DEFAULT_WALL_FRICTION: f32 = 1.0;
pub const DEFAULT_CIRCLE_MASS: f32 = 1.0;

/// Tunables for a simulation. Every field has a default, so a bundle only
/// needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity_x: f32,
    pub gravity_y: f32,
    /// Seconds advanced by one `step()`
    pub time_step: f32,
    /// Radius of the rounded segment used for walls
    pub wall_thickness: f32,
    pub wall_friction: f32,
    pub circle_mass: f32,
    pub circle_elasticity: f32,
    pub circle_friction: f32,
    /// Typical object size in engine units; scales the solver's tolerances
    pub length_unit: f32,
    pub allow_sleep: bool,
    /// Initial reservation for the body handle table
    pub body_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_x: DEFAULT_GRAVITY_X,
            gravity_y: DEFAULT_GRAVITY_Y,
            time_step: DEFAULT_TIME_STEP,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            wall_friction: DEFAULT_WALL_FRICTION,
            circle_mass: DEFAULT_CIRCLE_MASS,
            circle_elasticity: 0.0,
            circle_friction: 0.0,
            length_unit: 10.0,
            allow_sleep: false,
            body_capacity: 64,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> BridgeResult<Self> {
        let config: SimulationConfig = serde_json::from_str(json).context(ConfigParseErr)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if !self.gravity_x.is_finite() || !self.gravity_y.is_finite() {
            return InvalidConfigErr { reason: "gravity must be finite" }.fail();
        }

        let positive = [
            ("time_step", self.time_step),
            ("circle_mass", self.circle_mass),
            ("length_unit", self.length_unit),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return InvalidConfigErr {
                    reason: format!("{name} must be a positive number, got {value}"),
                }
                .fail();
            }
        }

        if !self.wall_thickness.is_finite() || self.wall_thickness < 0.0 {
            return InvalidConfigErr { reason: "wall_thickness must not be negative" }.fail();
        }

        Ok(())
    }
}
