//! Player movement integration
//!
//! Movement is instantaneous: no acceleration or friction, and no terminal
//! velocity while falling.

use super::state::Player;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::tuning::Tuning;

/// Result of integrating the player for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integration {
    /// Player is still inside the world
    InBounds,
    /// Player dropped below the bottom edge
    FellOff,
}

/// Start a jump if the player is standing on something
///
/// Returns true if the jump happened.
pub fn try_jump(player: &mut Player, tuning: &Tuning) -> bool {
    if !player.on_ground {
        return false;
    }
    player.vel.y = tuning.jump_force;
    player.on_ground = false;
    true
}

/// Apply input, gravity and velocity to the player, then clamp to the world
///
/// `direction` is -1 (left), 0 or +1 (right).
pub fn integrate_player(player: &mut Player, direction: f32, tuning: &Tuning) -> Integration {
    player.vel.x = direction * tuning.move_speed;
    player.vel.y += tuning.gravity;

    player.pos += player.vel;

    player.pos.x = player.pos.x.clamp(0.0, WORLD_WIDTH - player.size.x);

    if player.pos.y > WORLD_HEIGHT {
        Integration::FellOff
    } else {
        Integration::InBounds
    }
}
