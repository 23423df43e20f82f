//! Coin Hop - A single-screen coin collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Render collaborator interface and CPU-side scene geometry
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (the visible canvas)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;

    /// Added to the player's vertical velocity every tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set on jump (negative is up)
    pub const JUMP_FORCE: f32 = -15.0;
    /// Horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;

    /// Downward pull applied to particles every tick
    pub const PARTICLE_GRAVITY: f32 = 0.2;

    /// Points per coin
    pub const COIN_VALUE: u64 = 10;
    /// Coin spin per tick (radians, presentation only)
    pub const COIN_SPIN: f32 = 0.1;
}
