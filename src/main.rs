//! Coin Hop entry point
//!
//! Native headless driver: plays a scripted run, one tick per frame, logs
//! gameplay events and prints a JSON summary.
//!
//! Usage: `coin-hop [tuning.json] [level.json]`

use std::path::Path;

use coin_hop::Tuning;
use coin_hop::renderer::{HeadlessRenderer, Renderer};
use coin_hop::sim::{GameEvent, GameState, Level, TickInput, tick};

/// Seed for particle randomness in the demo run
const DEMO_SEED: u64 = 2024;

/// One step of the scripted demo
#[derive(Debug, Clone, Copy)]
enum Action {
    Idle,
    Left,
    Right,
    /// Jump on the first frame, then hold right
    JumpRight,
    /// Jump on the first frame, then hold left
    JumpLeft,
    Restart,
}

/// (frames, action) pairs played in order
const SCRIPT: &[(u32, Action)] = &[
    (40, Action::Idle),
    (30, Action::Right),
    (40, Action::JumpRight),
    (30, Action::Idle),
    (20, Action::JumpLeft),
    (40, Action::Idle),
    (60, Action::Right),
    (5, Action::Restart),
    (40, Action::Idle),
    (35, Action::Left),
    (60, Action::Idle),
];

/// Game instance holding all state
struct Game {
    state: GameState,
    renderer: HeadlessRenderer,
    input: TickInput,
}

impl Game {
    fn new(level: Level, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_level(level, tuning, DEMO_SEED),
            renderer: HeadlessRenderer::new(),
            input: TickInput::default(),
        }
    }

    /// Translate the current script action into held/edge input
    fn apply_action(&mut self, action: Action, first_frame: bool) {
        self.input.move_left = matches!(action, Action::Left | Action::JumpLeft);
        self.input.move_right = matches!(action, Action::Right | Action::JumpRight);
        self.input.jump = first_frame && matches!(action, Action::JumpRight | Action::JumpLeft);
        self.input.restart = first_frame && matches!(action, Action::Restart);
    }

    /// Run one frame: simulate, then draw
    fn frame(&mut self) {
        tick(&mut self.state, &self.input);

        // Clear one-shot inputs after processing
        self.input.jump = false;
        self.input.restart = false;

        for event in &self.state.events {
            match event {
                GameEvent::Jumped => log::debug!("Jump"),
                GameEvent::CoinCollected { index, score } => {
                    log::info!("Coin {} collected (score {})", index, score)
                }
                GameEvent::HitHazard { kind } => log::info!("Hit {:?}", kind),
                GameEvent::Fell => log::info!("Fell off the world"),
                GameEvent::Restarted => log::info!("Restarted"),
            }
        }

        self.renderer.render(&self.state);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Coin Hop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = args
        .next()
        .map(|p| Tuning::load_or_default(Path::new(&p)))
        .unwrap_or_default();
    let level = args
        .next()
        .map(|p| Level::load_or_default(Path::new(&p)))
        .unwrap_or_default();

    let mut game = Game::new(level, tuning);
    log::info!(
        "Level has {} platforms, {} coins, {} hazards",
        game.state.platforms.len(),
        game.state.coins.len(),
        game.state.spikes.len() + game.state.obstacles.len()
    );

    for &(frames, action) in SCRIPT {
        for i in 0..frames {
            game.apply_action(action, i == 0);
            game.frame();
        }
    }

    let summary = serde_json::json!({
        "frames": game.renderer.frames,
        "ticks": game.state.time_ticks,
        "phase": game.state.phase,
        "score": game.state.score,
        "coins_remaining": game.state.coins_remaining(),
        "particles": game.state.particles.len(),
        "last_frame_bytes": game.renderer.last_frame_bytes(),
    });
    println!("{}", summary);
}
