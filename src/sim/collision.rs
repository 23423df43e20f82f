//! Collision detection and response
//!
//! Every test is a plain AABB overlap. Categories are resolved in a fixed
//! order (platforms, coins, spikes, moving obstacles) and every entity is
//! checked, even after a hazard has already ended the run this tick.

use super::particles::spawn_burst;
use super::rect::Rect;
use super::state::{BurstKind, GameEvent, GameState, HazardKind, Player};

/// Land the player on top of a platform if they are falling onto it
///
/// Only top landings are resolved. Side and underside contact pass through.
/// Returns true if the player was snapped onto the platform.
pub fn land_on_platform(player: &mut Player, platform: &Rect) -> bool {
    if !player.rect().overlaps(platform) {
        return false;
    }

    if player.vel.y > 0.0 && player.pos.y < platform.y {
        player.pos.y = platform.y - player.size.y;
        player.vel.y = 0.0;
        player.on_ground = true;
        return true;
    }

    false
}

/// Resolve all player collisions for this tick
pub fn resolve_collisions(state: &mut GameState) {
    state.player.on_ground = false;

    // --- PLATFORMS ---
    for platform in &state.platforms {
        land_on_platform(&mut state.player, &platform.rect);
    }

    // --- COINS ---
    let player_rect = state.player.rect();
    for (index, coin) in state.coins.iter_mut().enumerate() {
        if coin.collected || !player_rect.overlaps(&coin.rect) {
            continue;
        }

        coin.collected = true;
        state.score += state.tuning.coin_value;
        spawn_burst(
            &mut state.particles,
            &mut state.rng,
            BurstKind::Coin,
            coin.rect.center(),
        );
        log::debug!("Coin {} collected, score {}", index, state.score);
        state.events.push(GameEvent::CoinCollected {
            index,
            score: state.score,
        });
    }

    // --- HAZARDS ---
    let spike_hits = state
        .spikes
        .iter()
        .filter(|s| player_rect.overlaps(&s.rect))
        .map(|_| HazardKind::Spike);
    let obstacle_hits = state
        .obstacles
        .iter()
        .filter(|o| player_rect.overlaps(&o.rect))
        .map(|_| HazardKind::MovingObstacle);
    let hits: Vec<HazardKind> = spike_hits.chain(obstacle_hits).collect();

    for kind in hits {
        state.end_run();
        spawn_burst(
            &mut state.particles,
            &mut state.rng,
            BurstKind::Death,
            state.player.center(),
        );
        state.events.push(GameEvent::HitHazard { kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Level;
    use crate::sim::state::{Coin, GamePhase, MovingObstacle, Platform, Spike};
    use crate::tuning::Tuning;
    use glam::Vec2;

    /// A level with only the ground, so tests control every overlap
    fn bare_state() -> GameState {
        let level = Level {
            spawn: Vec2::new(100.0, 300.0),
            platforms: vec![Platform::new(0.0, 560.0, 800.0, 40.0)],
            coins: Vec::new(),
            spikes: Vec::new(),
            obstacles: Vec::new(),
        };
        GameState::with_level(level, Tuning::default(), 3)
    }

    #[test]
    fn test_lands_when_falling_onto_platform() {
        let mut player = Player::new(Vec2::new(100.0, 530.0));
        player.vel.y = 3.0;
        let ground = Rect::new(0.0, 560.0, 800.0, 40.0);

        assert!(land_on_platform(&mut player, &ground));
        assert_eq!(player.pos.y, 528.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_rising_through_platform_is_not_resolved() {
        let mut player = Player::new(Vec2::new(220.0, 460.0));
        player.vel.y = -10.0;
        let ledge = Rect::new(200.0, 450.0, 120.0, 20.0);

        assert!(!land_on_platform(&mut player, &ledge));
        assert_eq!(player.pos.y, 460.0);
        assert_eq!(player.vel.y, -10.0);
    }

    #[test]
    fn test_side_contact_is_not_resolved() {
        // Top of player below platform top: falling, overlapping, but not from above
        let mut player = Player::new(Vec2::new(190.0, 455.0));
        player.vel.y = 2.0;
        let ledge = Rect::new(200.0, 450.0, 120.0, 20.0);

        assert!(!land_on_platform(&mut player, &ledge));
        assert_eq!(player.pos.y, 455.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_coin_pickup() {
        let mut state = bare_state();
        state.coins.push(Coin::new(110.0, 310.0));
        state.coins.push(Coin::new(400.0, 310.0));

        resolve_collisions(&mut state);

        assert_eq!(state.score, 10);
        assert!(state.coins[0].collected);
        assert!(!state.coins[1].collected);
        assert_eq!(state.particles.len(), 12);
        assert!(state.particles.iter().all(|p| p.pos == Vec2::new(120.0, 320.0)));
        assert_eq!(
            state.events,
            vec![GameEvent::CoinCollected { index: 0, score: 10 }]
        );
    }

    #[test]
    fn test_collected_coin_is_not_counted_again() {
        let mut state = bare_state();
        state.coins.push(Coin::new(110.0, 310.0));

        resolve_collisions(&mut state);
        resolve_collisions(&mut state);

        assert_eq!(state.score, 10);
        assert_eq!(state.particles.len(), 12);
    }

    #[test]
    fn test_spike_ends_run() {
        let mut state = bare_state();
        state.spikes.push(Spike::new(110.0, 300.0));

        resolve_collisions(&mut state);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.particles.len(), 20);
        assert!(state.particles.iter().all(|p| p.pos == Vec2::new(116.0, 316.0)));
    }

    #[test]
    fn test_every_hazard_is_checked() {
        let mut state = bare_state();
        state.spikes.push(Spike::new(110.0, 300.0));
        let mut obstacle = MovingObstacle::new(90.0, 200.0, 300.0, 1.0);
        obstacle.rect.x = 100.0;
        state.obstacles.push(obstacle);

        resolve_collisions(&mut state);

        assert!(state.is_game_over());
        assert_eq!(state.particles.len(), 40);
        assert_eq!(
            state.events,
            vec![
                GameEvent::HitHazard { kind: HazardKind::Spike },
                GameEvent::HitHazard { kind: HazardKind::MovingObstacle },
            ]
        );
    }

    #[test]
    fn test_coins_still_collected_on_fatal_tick() {
        let mut state = bare_state();
        state.coins.push(Coin::new(100.0, 300.0));
        state.spikes.push(Spike::new(100.0, 300.0));

        resolve_collisions(&mut state);

        assert!(state.is_game_over());
        assert_eq!(state.score, 10);
        assert_eq!(state.particles.len(), 32);
    }

    #[test]
    fn test_on_ground_cleared_when_airborne() {
        let mut state = bare_state();
        state.player.on_ground = true;

        resolve_collisions(&mut state);

        assert!(!state.player.on_ground);
    }
}
