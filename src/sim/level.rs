//! Level layout
//!
//! A level is pure data: where the player spawns and where every platform,
//! coin and hazard starts. The built-in layout is `Level::default()`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Coin, MovingObstacle, Platform, Spike};
use crate::consts::{PLAYER_SPAWN_X, PLAYER_SPAWN_Y, WORLD_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub spawn: Vec2,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub spikes: Vec<Spike>,
    #[serde(default)]
    pub obstacles: Vec<MovingObstacle>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            platforms: vec![
                Platform::new(0.0, 560.0, WORLD_WIDTH, 40.0), // Ground
                Platform::new(200.0, 450.0, 120.0, 20.0),
                Platform::new(400.0, 350.0, 120.0, 20.0),
                Platform::new(600.0, 250.0, 120.0, 20.0),
                Platform::new(300.0, 200.0, 120.0, 20.0),
                Platform::new(100.0, 150.0, 100.0, 20.0),
                Platform::new(500.0, 100.0, 100.0, 20.0),
            ],
            coins: vec![
                // Above each platform
                Coin::new(250.0, 420.0),
                Coin::new(450.0, 320.0),
                Coin::new(650.0, 220.0),
                Coin::new(350.0, 180.0),
                Coin::new(150.0, 130.0),
                Coin::new(550.0, 80.0),
                // Along the ground
                Coin::new(300.0, 520.0),
                Coin::new(500.0, 520.0),
                Coin::new(700.0, 520.0),
                Coin::new(100.0, 520.0),
            ],
            spikes: vec![Spike::new(50.0, 520.0), Spike::new(750.0, 520.0)],
            obstacles: vec![
                MovingObstacle::new(150.0, 250.0, 520.0, 0.8),
                MovingObstacle::new(550.0, 650.0, 520.0, 0.6),
            ],
        }
    }
}

impl Level {
    /// Parse a level from JSON
    ///
    /// Rejects layouts the simulation cannot run, such as a patrol whose
    /// start lies past its end.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let level: Self = serde_json::from_str(json)?;
        level
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(level)
    }

    /// Check patrol bounds and speeds
    pub fn validate(&self) -> Result<(), String> {
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if !obstacle.start_x.is_finite() || !obstacle.end_x.is_finite() {
                return Err(format!("obstacle {i}: patrol bounds must be finite"));
            }
            if obstacle.start_x > obstacle.end_x {
                return Err(format!(
                    "obstacle {i}: start_x {} is past end_x {}",
                    obstacle.start_x, obstacle.end_x
                ));
            }
            if !obstacle.speed.is_finite() {
                return Err(format!("obstacle {i}: speed must be finite"));
            }
        }
        Ok(())
    }

    /// Load from a file, falling back to the built-in level if it is missing
    /// or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(level) => {
                    log::info!("Loaded level from {}", path.display());
                    level
                }
                Err(e) => {
                    log::warn!("Invalid level file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read level file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
