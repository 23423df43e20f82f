//! Data-driven game balance
//!
//! Defaults reproduce the shipped feel exactly. Any field may be omitted from
//! a JSON override and falls back to its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and scoring constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to player vy every tick
    pub gravity: f32,
    /// Player vy on jump (negative is up)
    pub jump_force: f32,
    /// Player horizontal speed while moving
    pub move_speed: f32,
    /// Added to particle vy every tick
    pub particle_gravity: f32,
    /// Points per coin
    pub coin_value: u64,
    /// Coin spin per tick (radians)
    pub coin_spin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            move_speed: MOVE_SPEED,
            particle_gravity: PARTICLE_GRAVITY,
            coin_value: COIN_VALUE,
            coin_spin: COIN_SPIN,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
