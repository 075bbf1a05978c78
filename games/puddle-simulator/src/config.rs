use serde::{Deserialize, Serialize};

use crate::molecule::MOLECULE_RADIUS;

/// Tunable constants for the simulation and game pacing.
/// Every field has a default, so a partial JSON file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuddleConfig {
    /// Distance at which two molecules stop pushing each other.
    pub interaction_range: f32,
    /// Peak repulsion between touching molecules, per visit. The solver visits each
    /// pair in both orders, so the net push is twice this.
    pub repulsion_strength: f32,
    /// Repulsion multiplier for molecules of different colors.
    pub mixed_color_multiplier: f32,
    /// Spring constant pulling escaped molecules back inside the container.
    pub boundary_stiffness: f32,
    /// Fraction of velocity lost per time unit.
    pub viscosity: f32,
    /// Velocity component bound for separating coincident molecules.
    pub coincident_kick: f32,
    /// Maximum center distance at which molecules count as neighbors for a fill.
    pub adjacency_distance: f32,
    /// Molecules recolored per animation step.
    pub recolor_batch: usize,
    /// Delay between recolor steps.
    pub recolor_delay: f32,
    /// Turns granted to a freshly created level.
    pub default_turns: u32,
    /// Radius of a freshly created container.
    pub default_container_radius: f32,
    /// Time spent in game over before the level restarts.
    pub game_over_delay: f32,
}

impl Default for PuddleConfig {
    fn default() -> Self {
        Self {
            interaction_range: MOLECULE_RADIUS * 4.0,
            repulsion_strength: 25.0,
            mixed_color_multiplier: 2.0,
            boundary_stiffness: 200.0,
            viscosity: 0.5,
            coincident_kick: 2.0,
            adjacency_distance: MOLECULE_RADIUS * 2.2,
            recolor_batch: 5,
            recolor_delay: 0.02,
            default_turns: 5,
            default_container_radius: 5.0,
            game_over_delay: 1.0,
        }
    }
}

impl PuddleConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
