//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (level list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod particles;
pub mod physics;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{land_on_platform, resolve_collisions};
pub use level::Level;
pub use particles::{COIN_BURST, DEATH_BURST, JUMP_BURST, spawn_burst, update_particles};
pub use physics::{Integration, integrate_player, try_jump};
pub use rect::Rect;
pub use state::{
    BurstKind, Coin, GameEvent, GamePhase, GameState, HazardKind, MovingObstacle, Particle,
    Platform, Player, Spike,
};
pub use tick::{TickInput, tick};
