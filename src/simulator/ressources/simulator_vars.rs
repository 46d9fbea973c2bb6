//! Variables used by the graph simulator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SimulatorError;

/// Tunable constants of the simulation.
///
/// Missing keys in a deserialized document fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorVars {
    /// Velocity is scaled by this every tick. `1.0` disables friction.
    pub friction: f32,
    /// Velocity components below this magnitude are zeroed.
    pub min_speed: f32,
    /// How strong the spring force of an edge should be.
    pub spring_stiffness: f32,
    /// Rest length of newly created edges.
    pub spring_neutral_length: f32,
    /// Velocity retained when bouncing off the world boundary.
    pub boundary_damping: f32,
    /// Gap kept between a node and the world boundary.
    pub boundary_margin: f32,
    /// Scale of the separation impulse between overlapping nodes.
    pub collision_damping: f32,
    /// Radius of newly created nodes.
    pub node_radius: f32,
    /// Distance from the world boundary kept when placing unconnected nodes.
    pub spawn_padding: f32,
    /// Distance between a long-pressed node and the node it spawns.
    pub spawn_distance: f32,
    /// How long the pointer must stay down before a long press fires.
    pub long_press_ms: u64,
}

impl SimulatorVars {
    /// Parses variables from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SimulatorError> {
        let vars: Self = serde_json::from_str(json)?;
        vars.validate()?;
        Ok(vars)
    }

    pub fn long_press_duration(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Checks every variable is in its admissible range.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if !(self.node_radius > 0.0 && self.node_radius.is_finite()) {
            return Err(SimulatorError::InvalidRadius(self.node_radius));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(invalid("friction", self.friction, "(0, 1]"));
        }
        check_unit("boundary_damping", self.boundary_damping)?;
        check_unit("collision_damping", self.collision_damping)?;
        check_non_negative("min_speed", self.min_speed)?;
        check_non_negative("spring_stiffness", self.spring_stiffness)?;
        check_non_negative("spring_neutral_length", self.spring_neutral_length)?;
        check_non_negative("boundary_margin", self.boundary_margin)?;
        check_non_negative("spawn_padding", self.spawn_padding)?;
        check_non_negative("spawn_distance", self.spawn_distance)?;
        Ok(())
    }
}

impl Default for SimulatorVars {
    fn default() -> Self {
        Self {
            friction: 0.98,
            min_speed: 0.01,
            spring_stiffness: 0.03,
            spring_neutral_length: 120.0,
            boundary_damping: 0.7,
            boundary_margin: 5.0,
            collision_damping: 0.8,
            node_radius: 30.0,
            spawn_padding: 100.0,
            spawn_distance: 100.0,
            long_press_ms: 500,
        }
    }
}

fn invalid(name: &str, value: f32, range: &str) -> SimulatorError {
    SimulatorError::InvalidConfig(format!("{name} = {value} is outside {range}"))
}

fn check_unit(name: &str, value: f32) -> Result<(), SimulatorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(name, value, "[0, 1]"))
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<(), SimulatorError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value, "[0, inf)"))
    }
}

/// Simulation world size. Nodes are contained in this rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl WorldSize {
    pub fn new(width: f32, height: f32) -> Result<Self, SimulatorError> {
        let valid = |v: f32| v > 0.0 && v.is_finite();
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(SimulatorError::InvalidWorldSize { width, height })
        }
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}
