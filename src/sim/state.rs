//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended (fell off or touched a hazard); only restart is accepted
    GameOver,
}

/// Which kind of hazard ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Spike,
    MovingObstacle,
}

/// Things that happened during the last tick (for logging, audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    CoinCollected { index: usize, score: u64 },
    HitHazard { kind: HazardKind },
    Fell,
    Restarted,
}

/// The player's sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_SIZE),
            on_ground: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Point the jump burst is emitted from
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Back to spawn, at rest and airborne
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Solid ground the player can land on from above
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
    /// Spin angle (radians), presentation only
    #[serde(default)]
    pub rotation: f32,
}

/// Default coin edge length
pub const COIN_SIZE: f32 = 20.0;

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            collected: false,
            rotation: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.collected = false;
        self.rotation = 0.0;
    }
}

/// A static, always-fatal hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub rect: Rect,
}

/// Default hazard edge length (spikes and patrolling obstacles)
pub const HAZARD_SIZE: f32 = 32.0;

impl Spike {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, HAZARD_SIZE, HAZARD_SIZE),
        }
    }
}

/// A fatal hazard that patrols horizontally between two bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingObstacle {
    pub rect: Rect,
    pub start_x: f32,
    pub end_x: f32,
    /// Pixels per tick
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
}

impl MovingObstacle {
    /// New obstacle parked at `start_x`, heading right
    pub fn new(start_x: f32, end_x: f32, y: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(start_x, y, HAZARD_SIZE, HAZARD_SIZE),
            start_x,
            end_x,
            speed,
            direction: 1.0,
        }
    }

    /// Advance one tick of ping-pong patrol
    ///
    /// The direction flips when the step lands on or past a bound, and the
    /// position is clamped afterwards, so the obstacle can rest exactly on a
    /// bound already facing back the other way.
    pub fn patrol(&mut self) {
        self.rect.x += self.speed * self.direction;

        if self.rect.x <= self.start_x || self.rect.x >= self.end_x {
            self.direction = -self.direction;
        }

        self.rect.x = self.rect.x.min(self.end_x).max(self.start_x);
    }

    pub fn reset(&mut self) {
        self.rect.x = self.start_x;
        self.direction = 1.0;
    }
}

/// Event that spawned a particle (selects its color family)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstKind {
    Jump,
    Coin,
    Death,
}

/// A particle for visual feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
    /// Ticks at spawn
    pub max_life: u32,
    pub kind: BurstKind,
    /// Hue in degrees, picked at spawn
    pub hue: f32,
}

impl Particle {
    /// Fade factor in [0, 1]
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducible particle bursts
    pub seed: u64,
    /// Physics and scoring constants
    pub tuning: Tuning,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Where the player (re)spawns
    pub spawn: Vec2,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub spikes: Vec<Spike>,
    pub obstacles: Vec<MovingObstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Particle RNG, saved mid-stream so restored snapshots stay in step
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game on the built-in level with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_level(Level::default(), Tuning::default(), seed)
    }

    /// Create a new game on a custom level
    pub fn with_level(level: Level, tuning: Tuning, seed: u64) -> Self {
        let Level {
            spawn,
            platforms,
            coins,
            spikes,
            obstacles,
        } = level;

        let mut state = Self {
            seed,
            tuning,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            spawn,
            player: Player::new(spawn),
            platforms,
            coins,
            spikes,
            obstacles,
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        // Authored levels may ship with stale runtime fields
        state.restart();
        state
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Number of coins still on the board
    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }

    /// Reset every mutable field to its setup value
    ///
    /// Depends only on the level layout and seed, so calling it twice in a row
    /// is the same as calling it once.
    pub fn restart(&mut self) {
        self.player.reset(self.spawn);
        for coin in &mut self.coins {
            coin.reset();
        }
        for obstacle in &mut self.obstacles {
            obstacle.reset();
        }
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.particles.clear();
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// End the run
    pub(crate) fn end_run(&mut self) {
        if self.phase != GamePhase::GameOver {
            log::info!(
                "Game over at tick {} with score {}",
                self.time_ticks,
                self.score
            );
        }
        self.phase = GamePhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patrol_flips_at_start_bound() {
        let mut obstacle = MovingObstacle::new(150.0, 250.0, 520.0, 0.8);
        obstacle.direction = -1.0;

        obstacle.patrol();

        assert_eq!(obstacle.direction, 1.0);
        assert_eq!(obstacle.rect.x, 150.0);
    }

    #[test]
    fn test_patrol_clamps_overshoot_at_end_bound() {
        let mut obstacle = MovingObstacle::new(150.0, 250.0, 520.0, 3.0);
        obstacle.rect.x = 249.0;

        obstacle.patrol();

        assert_eq!(obstacle.rect.x, 250.0);
        assert_eq!(obstacle.direction, -1.0);

        // Next tick heads back left
        obstacle.patrol();
        assert_eq!(obstacle.rect.x, 247.0);
        assert_eq!(obstacle.direction, -1.0);
    }

    #[test]
    fn test_patrol_moves_between_bounds() {
        let mut obstacle = MovingObstacle::new(550.0, 650.0, 520.0, 0.5);
        obstacle.patrol();
        assert_eq!(obstacle.rect.x, 550.5);
        assert_eq!(obstacle.direction, 1.0);
    }

    #[test]
    fn test_patrol_with_inverted_bounds_does_not_panic() {
        let mut obstacle = MovingObstacle::new(250.0, 150.0, 520.0, 0.8);

        obstacle.patrol();

        // min-then-max settles on start_x when the bounds are swapped
        assert_eq!(obstacle.rect.x, 250.0);
        assert_eq!(obstacle.direction, -1.0);
    }

    #[test]
    fn test_particle_alpha() {
        let particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 15,
            max_life: 60,
            kind: BurstKind::Death,
            hue: 10.0,
        };
        assert!((particle.alpha() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_new_state_matches_level() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(state.player.size, Vec2::splat(PLAYER_SIZE));
        assert_eq!(state.coins_remaining(), state.coins.len());
        assert!(state.particles.is_empty());
    }
}
