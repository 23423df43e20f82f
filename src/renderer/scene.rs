//! Scene geometry built from simulation state
//!
//! Produces one flat triangle list per frame, back to front, so any backend
//! can upload it in a single buffer and draw it with alpha blending.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{BurstKind, GameState, Particle, Rect};

/// Radius of a drawn particle
pub const PARTICLE_RADIUS: f32 = 3.0;
const PARTICLE_SEGMENTS: u32 = 6;
const COIN_SEGMENTS: u32 = 12;
/// Background stars
pub const STAR_COUNT: usize = 50;
const SCORE_HEIGHT: f32 = 20.0;
const FINAL_SCORE_HEIGHT: f32 = 48.0;

/// Twinkling star field; positions are fixed, size pulses with the tick count
fn stars(time_ticks: u64) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(STAR_COUNT * 6);
    for i in 0..STAR_COUNT {
        let x = ((i * 37) as f32) % WORLD_WIDTH;
        let y = ((i * 73) as f32) % WORLD_HEIGHT;
        let size = (time_ticks as f32 * 0.01 + i as f32).sin() * 0.5 + 0.5;
        vertices.extend(shapes::rect(&Rect::new(x, y, size, size), colors::STAR));
    }
    vertices
}

fn particle_color(p: &Particle) -> [f32; 4] {
    let saturation = match p.kind {
        BurstKind::Jump => 0.7,
        BurstKind::Coin | BurstKind::Death => 1.0,
    };
    shapes::hsl_to_rgba(p.hue, saturation, 0.6, p.alpha())
}

/// Build the full frame for `state`
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = shapes::rect(
        &Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
        colors::BACKGROUND,
    );
    vertices.extend(stars(state.time_ticks));

    for platform in &state.platforms {
        vertices.extend(shapes::rect(&platform.rect, colors::PLATFORM));
    }

    for coin in state.coins.iter().filter(|c| !c.collected) {
        // Spin reads as the coin narrowing toward edge-on
        let squash = coin.rotation.cos().abs().max(0.1);
        vertices.extend(shapes::ellipse(
            coin.rect.center(),
            coin.rect.w / 2.0,
            squash,
            colors::COIN,
            COIN_SEGMENTS,
        ));
    }

    for spike in &state.spikes {
        vertices.extend(shapes::spike(&spike.rect, colors::SPIKE));
    }

    for obstacle in &state.obstacles {
        vertices.extend(shapes::spike(&obstacle.rect, colors::OBSTACLE));
    }

    for particle in &state.particles {
        vertices.extend(shapes::circle(
            particle.pos,
            PARTICLE_RADIUS,
            particle_color(particle),
            PARTICLE_SEGMENTS,
        ));
    }

    let player = &state.player;
    vertices.extend(shapes::rect(&player.rect(), colors::PLAYER));
    for eye_x in [6.0, 22.0] {
        let eye = Rect::from_pos_size(player.pos + Vec2::new(eye_x, 8.0), Vec2::splat(4.0));
        vertices.extend(shapes::rect(&eye, colors::PLAYER_EYE));
    }

    // HUD
    vertices.extend(shapes::rect(
        &Rect::new(15.0, 15.0, 120.0, 35.0),
        colors::SCORE_PANEL,
    ));
    vertices.extend(shapes::number(
        state.score,
        Vec2::new(25.0, 22.0),
        SCORE_HEIGHT,
        colors::SCORE_TEXT,
    ));

    if state.is_game_over() {
        vertices.extend(shapes::rect(
            &Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
            colors::GAME_OVER_OVERLAY,
        ));

        // Final score centered on the overlay
        let digits = state.score.to_string().len() as f32;
        let width = digits * shapes::digit_advance(FINAL_SCORE_HEIGHT);
        let origin = Vec2::new(
            (WORLD_WIDTH - width) / 2.0,
            (WORLD_HEIGHT - FINAL_SCORE_HEIGHT) / 2.0,
        );
        vertices.extend(shapes::number(
            state.score,
            origin,
            FINAL_SCORE_HEIGHT,
            colors::FINAL_SCORE,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_collected_coins_not_drawn() {
        let mut state = GameState::new(1);
        let before = build_scene(&state).len();

        state.coins[0].collected = true;
        let after = build_scene(&state).len();

        assert_eq!(before - after, (COIN_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_game_over_adds_overlay() {
        let mut state = GameState::new(1);
        let running = build_scene(&state);

        state.player.pos.y = 700.0;
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        let over = build_scene(&state);
        // Overlay quad plus a single "0" final score (six segments)
        assert_eq!(over.len(), running.len() + 6 + 36);
        assert!(over.iter().any(|v| v.color == colors::GAME_OVER_OVERLAY));
        assert_eq!(over.last().map(|v| v.color), Some(colors::FINAL_SCORE));
    }

    #[test]
    fn test_stars_twinkle_with_ticks() {
        let early = stars(0);
        let later = stars(100);
        assert_eq!(early.len(), STAR_COUNT * 6);
        assert_eq!(later.len(), early.len());
        assert_ne!(early, later);
        // Star anchors never move
        for (a, b) in early.iter().zip(&later).step_by(6) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn test_score_drawn_in_hud() {
        let mut state = GameState::new(1);
        let zero = build_scene(&state);

        state.score = 10;
        let ten = build_scene(&state);

        // "0" is six segments, "10" is eight
        assert_eq!(ten.len(), zero.len() + 2 * 6);
        assert!(ten.iter().any(|v| v.color == colors::SCORE_TEXT));
    }

    #[test]
    fn test_particles_fade() {
        let mut state = GameState::new(1);
        state.player.on_ground = true;
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        );
        let particle = &state.particles[0];
        let color = particle_color(particle);
        assert!((color[3] - 29.0 / 30.0).abs() < 1e-6);
    }
}
