//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame. There is
//! no timestep: the caller runs one tick per rendered frame.

use super::collision::resolve_collisions;
use super::particles::{spawn_burst, update_particles};
use super::physics::{Integration, integrate_player, try_jump};
use super::state::{BurstKind, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
///
/// `move_left`/`move_right` are held state. `jump` and `restart` are edges:
/// the caller sets them only on the frame the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub restart: bool,
}

impl TickInput {
    /// Horizontal direction, left wins when both are held
    pub fn direction(&self) -> f32 {
        if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        // Frozen until restart
        if input.restart {
            state.restart();
            state.events.push(GameEvent::Restarted);
            log::info!("Game restarted");
        }
        return;
    }

    if input.jump && try_jump(&mut state.player, &state.tuning) {
        let feet = state.player.feet();
        spawn_burst(&mut state.particles, &mut state.rng, BurstKind::Jump, feet);
        state.events.push(GameEvent::Jumped);
    }

    state.time_ticks += 1;

    update_particles(&mut state.particles, state.tuning.particle_gravity);

    for obstacle in &mut state.obstacles {
        obstacle.patrol();
    }

    if integrate_player(&mut state.player, input.direction(), &state.tuning)
        == Integration::FellOff
    {
        state.end_run();
        state.events.push(GameEvent::Fell);
        return;
    }

    resolve_collisions(state);

    let spin = state.tuning.coin_spin;
    for coin in state.coins.iter_mut().filter(|c| !c.collected) {
        coin.rotation += spin;
    }
}
