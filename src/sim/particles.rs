//! Visual feedback particles
//!
//! Bursts are spawned by gameplay events and drift under a light gravity until
//! their life runs out. They never influence gameplay.

use glam::Vec2;
use rand::Rng;

use super::state::{BurstKind, Particle};

/// Shape of a burst
#[derive(Debug, Clone, Copy)]
struct BurstSpec {
    count: usize,
    life: u32,
    /// Hue range start (degrees)
    hue_base: f32,
    /// Hue range width (degrees)
    hue_range: f32,
}

impl BurstKind {
    fn spec(self) -> BurstSpec {
        match self {
            BurstKind::Jump => BurstSpec {
                count: JUMP_BURST,
                life: 30,
                hue_base: 200.0,
                hue_range: 40.0,
            },
            BurstKind::Coin => BurstSpec {
                count: COIN_BURST,
                life: 40,
                hue_base: 60.0,
                hue_range: 20.0,
            },
            BurstKind::Death => BurstSpec {
                count: DEATH_BURST,
                life: 60,
                hue_base: 0.0,
                hue_range: 30.0,
            },
        }
    }

    /// Initial velocity for one particle of this burst
    fn velocity(self, rng: &mut impl Rng) -> Vec2 {
        match self {
            // Dust kicked sideways and up from the feet
            BurstKind::Jump => {
                let vx = (rng.random::<f32>() - 0.5) * 4.0;
                let vy = -rng.random::<f32>() * 3.0;
                Vec2::new(vx, vy)
            }
            BurstKind::Coin => spread(rng, 6.0),
            BurstKind::Death => spread(rng, 8.0),
        }
    }
}

/// Uniform velocity in a square of the given width centered on zero
fn spread(rng: &mut impl Rng, width: f32) -> Vec2 {
    let vx = (rng.random::<f32>() - 0.5) * width;
    let vy = (rng.random::<f32>() - 0.5) * width;
    Vec2::new(vx, vy)
}

/// Particles per jump
pub const JUMP_BURST: usize = 8;
/// Particles per coin pickup
pub const COIN_BURST: usize = 12;
/// Particles per death
pub const DEATH_BURST: usize = 20;

/// Emit a full burst of `kind` centered at `origin`
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut impl Rng,
    kind: BurstKind,
    origin: Vec2,
) {
    let spec = kind.spec();
    particles.reserve(spec.count);

    for _ in 0..spec.count {
        let vel = kind.velocity(rng);
        let hue = spec.hue_base + rng.random::<f32>() * spec.hue_range;
        particles.push(Particle {
            pos: origin,
            vel,
            life: spec.life,
            max_life: spec.life,
            kind,
            hue,
        });
    }
}

/// Advance every particle one tick and drop the expired ones
///
/// Position moves by the current velocity before gravity is applied, and a
/// particle is removed in the same pass its life reaches zero.
pub fn update_particles(particles: &mut Vec<Particle>, gravity: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += gravity;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
