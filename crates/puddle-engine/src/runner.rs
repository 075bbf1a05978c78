use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{GameEvent, SoundEvent};
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};

/// Generic game runner that wires up the engine loop.
///
/// The host owns one runner, pushes input as it arrives and calls [`GameRunner::tick`]
/// once per frame with the elapsed frame time. Sounds and events emitted during the
/// frame stay readable until the next tick.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);
        let ctx = EngineContext::new(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::debug!("runner initialized, fixed dt {:.4}", self.config.fixed_dt);
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: zero or more fixed game ticks for `frame_dt` seconds.
    /// Returns the number of ticks run.
    pub fn tick(&mut self, frame_dt: f32) -> u32 {
        if !self.initialized {
            return 0;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(frame_dt);
        self.ctx.dt = self.timestep.dt();
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            // Events reach the first tick of the frame only; held keys stay.
            self.input.drain();
        }
        steps
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// Events flattened to `kind, a, b, c` quadruples for a shared buffer.
    pub fn events_as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.ctx.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
