use crate::api::types::{SoundEvent, GameEvent};
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Upper bound on fixed steps run for a single host frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// RNG seed. `None` seeds from the system clock so every session differs.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            max_sounds: 32,
            max_events: 32,
            seed: None,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, load the first level.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. `ctx.dt` holds the step length.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    /// Length of the current tick in seconds.
    pub dt: f32,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    max_sounds: usize,
    max_events: usize,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Rng::new(seed),
            None => Rng::from_time(),
        };
        Self {
            dt: config.fixed_dt,
            rng,
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            max_sounds: config.max_sounds,
            max_events: config.max_events,
        }
    }

    /// Emit a sound event to be forwarded to the host.
    /// Identical sounds within one frame are collapsed.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.contains(&event) {
            return;
        }
        if self.sounds.len() >= self.max_sounds {
            log::warn!("sound buffer full, dropping sound {}", event.0);
            return;
        }
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full, dropping event kind {}", event.kind_id());
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
