use glam::Vec2;
use puddle_engine::{
    approach, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, Key, PointerButton,
    SoundEvent,
};

use crate::config::PuddleConfig;
use crate::container::{Container, ContainerStatus};
use crate::level::LevelStore;
use crate::molecule::PaletteColor;
use crate::progress::Progress;

// Sound ids (Rust → host)
pub const SOUND_WIN: SoundEvent = SoundEvent(1);
pub const SOUND_GAME_OVER: SoundEvent = SoundEvent(2);
pub const SOUND_CLICK: SoundEvent = SoundEvent(3);
pub const SOUND_FAIL: SoundEvent = SoundEvent(4);
/// Fill sound variations. Consecutive fills never play the same one.
pub const SOUND_FILL: [SoundEvent; 3] = [SoundEvent(5), SoundEvent(6), SoundEvent(7)];

// Game event kinds (Rust → host)
pub const EVENT_STATE: u32 = 1;
pub const EVENT_TURNS: u32 = 2;
pub const EVENT_LEVEL: u32 = 3;
pub const EVENT_LEVEL_SAVED: u32 = 4;

// Custom event kinds (host UI → Rust)
pub const CUSTOM_SELECT_COLOR: u32 = 1;
pub const CUSTOM_NEXT_LEVEL: u32 = 2;
pub const CUSTOM_PREV_LEVEL: u32 = 3;
pub const CUSTOM_REPLAY: u32 = 4;
pub const CUSTOM_INCREASE_TURNS: u32 = 5;
pub const CUSTOM_DECREASE_TURNS: u32 = 6;

/// Molecules spawned by one press of the space key in the editor.
const EDITOR_SPAWN_COUNT: usize = 5;

/// Top-level game phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Play,
    Win,
    GameOver,
    Editor,
}

impl GameState {
    /// Numeric id used in `EVENT_STATE` payloads.
    pub fn id(self) -> u32 {
        match self {
            GameState::Play => 0,
            GameState::Win => 1,
            GameState::GameOver => 2,
            GameState::Editor => 3,
        }
    }
}

/// Level change to apply at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelRequest {
    Keep,
    /// Load the current level again from the store.
    Reload,
    Go(usize),
}

pub struct PuddleGame {
    config: PuddleConfig,
    levels: Box<dyn LevelStore>,
    progress: Progress,
    container: Container,
    state: GameState,
    /// Applied at the start of the next tick.
    requested_state: GameState,
    level_index: usize,
    requested_level: LevelRequest,
    selected_color: PaletteColor,
    game_over_elapsed: f32,
    fade: f32,
    /// Turn count last reported to the host.
    reported_turns: Option<u32>,
    /// Index into `SOUND_FILL` of the last fill sound.
    last_fill_sound: Option<usize>,
    seed: Option<u64>,
}

impl PuddleGame {
    pub fn new(levels: impl LevelStore + 'static, progress: Progress, config: PuddleConfig) -> Self {
        let container = Container::empty(&config);
        Self {
            config,
            levels: Box::new(levels),
            progress,
            container,
            state: GameState::Play,
            requested_state: GameState::Play,
            level_index: 0,
            requested_level: LevelRequest::Keep,
            selected_color: PaletteColor::RED,
            game_over_elapsed: 0.0,
            fade: 0.0,
            reported_turns: None,
            last_fill_sound: None,
            seed: None,
        }
    }

    /// Fix the RNG seed for reproducible sessions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn requested_state(&self) -> GameState {
        self.requested_state
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.level_count()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn selected_color(&self) -> PaletteColor {
        self.selected_color
    }

    pub fn turns_remaining(&self) -> u32 {
        self.container.turns_remaining()
    }

    pub fn is_filling(&self) -> bool {
        self.container.is_filling()
    }

    /// Post-process fade strength in [0, 1].
    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn is_next_level_available(&self) -> bool {
        if self.level_index + 1 >= self.levels.level_count() {
            return false;
        }
        // The editor can browse freely; players must finish the current level first.
        self.state == GameState::Editor || self.progress.num_completed_levels > self.level_index
    }

    pub fn is_prev_level_available(&self) -> bool {
        self.level_index > 0
    }

    /// Load level `index` (clamped). Falls back to an empty level in the editor.
    fn start_level(&mut self, index: usize, ctx: &mut EngineContext) {
        let count = self.levels.level_count();
        let index = index.min(count.saturating_sub(1));
        self.level_index = index;
        self.requested_level = LevelRequest::Keep;

        match self.levels.load(index) {
            Ok(level) => {
                self.container = Container::from_level(&level, &self.config);
                log::info!(
                    "level {}/{}: {} molecules, {} turns",
                    index + 1,
                    count,
                    self.container.molecules().len(),
                    self.container.turns_remaining()
                );
            }
            Err(e) => {
                log::warn!("level {} unavailable ({}), opening an empty level in the editor", index, e);
                self.container = Container::empty(&self.config);
                self.state = GameState::Editor;
                self.requested_state = GameState::Editor;
                ctx.emit_event(GameEvent::new(EVENT_STATE, GameState::Editor.id() as f32, 0.0, 0.0));
            }
        }
        ctx.emit_event(GameEvent::new(EVENT_LEVEL, index as f32, count as f32, 0.0));
    }

    /// Apply the state and level requested during the previous tick.
    fn apply_requests(&mut self, ctx: &mut EngineContext) {
        if self.state != self.requested_state {
            self.state = self.requested_state;
            log::info!("state -> {:?}", self.state);
            match self.state {
                GameState::Win => {
                    ctx.emit_sound(SOUND_WIN);
                    self.progress.complete(self.level_index, self.levels.level_count());
                }
                GameState::GameOver => {
                    ctx.emit_sound(SOUND_GAME_OVER);
                    self.game_over_elapsed = 0.0;
                }
                GameState::Play | GameState::Editor => {}
            }
            ctx.emit_event(GameEvent::new(EVENT_STATE, self.state.id() as f32, 0.0, 0.0));
        }

        match self.requested_level {
            LevelRequest::Keep => {}
            LevelRequest::Reload => self.start_level(self.level_index, ctx),
            LevelRequest::Go(index) => self.start_level(index, ctx),
        }
    }

    /// Fill from the molecule under `point` with the selected color.
    fn fill_at(&mut self, point: Vec2, ctx: &mut EngineContext) {
        if self.container.is_filling() {
            return;
        }
        if let Some(index) = self.container.molecule_at(point) {
            if self.container.fill(index, self.selected_color) > 0 {
                self.play_fill_sound(ctx);
            }
        }
    }

    fn play_fill_sound(&mut self, ctx: &mut EngineContext) {
        let count = SOUND_FILL.len();
        let variation = match self.last_fill_sound {
            // Skip ahead by 1..count so the previous variation is never picked.
            Some(last) => (last + 1 + ctx.rng.next_int(count as u32 - 1) as usize) % count,
            None => ctx.rng.next_int(count as u32) as usize,
        };
        self.last_fill_sound = Some(variation);
        ctx.emit_sound(SOUND_FILL[variation]);
    }

    /// Editor brush: recolor whatever molecule is under `point`.
    fn paint_at(&mut self, point: Vec2) {
        if let Some(index) = self.container.molecule_at(point) {
            self.container.recolor(index, self.selected_color);
        }
    }

    fn select_color(&mut self, index: f32, ctx: &mut EngineContext) {
        if self.container.is_filling() {
            ctx.emit_sound(SOUND_FAIL);
            return;
        }
        if index < 0.0 {
            return;
        }
        if let Some(color) = PaletteColor::new(index as u8) {
            self.selected_color = color;
            ctx.emit_sound(SOUND_CLICK);
        }
    }

    fn go_next(&mut self, ctx: &mut EngineContext) {
        // Re-checked here: two clicks can land in one frame.
        if !self.is_next_level_available() {
            return;
        }
        self.requested_level = LevelRequest::Go(self.level_index + 1);
        self.leave_win();
        ctx.emit_sound(SOUND_CLICK);
    }

    fn go_prev(&mut self, ctx: &mut EngineContext) {
        if !self.is_prev_level_available() {
            return;
        }
        self.requested_level = LevelRequest::Go(self.level_index - 1);
        self.leave_win();
        ctx.emit_sound(SOUND_CLICK);
    }

    fn replay(&mut self, ctx: &mut EngineContext) {
        self.requested_level = LevelRequest::Reload;
        self.leave_win();
        ctx.emit_sound(SOUND_CLICK);
    }

    fn leave_win(&mut self) {
        if self.state == GameState::Win {
            self.requested_state = GameState::Play;
        }
    }

    fn save_level(&mut self, ctx: &mut EngineContext) {
        let level = self.container.to_level();
        match self.levels.save(self.level_index, &level) {
            Ok(()) => {
                log::info!("saved level {} ({} molecules)", self.level_index, level.molecules.len());
                ctx.emit_event(GameEvent::new(EVENT_LEVEL_SAVED, self.level_index as f32, 0.0, 0.0));
            }
            Err(e) => log::warn!("failed to save level {}: {}", self.level_index, e),
        }
    }

    fn handle_custom(&mut self, kind: u32, a: f32, ctx: &mut EngineContext) {
        match kind {
            CUSTOM_SELECT_COLOR => self.select_color(a, ctx),
            CUSTOM_NEXT_LEVEL => self.go_next(ctx),
            CUSTOM_PREV_LEVEL => self.go_prev(ctx),
            CUSTOM_REPLAY => self.replay(ctx),
            CUSTOM_INCREASE_TURNS if self.state == GameState::Editor => {
                self.container.increase_turns();
                ctx.emit_sound(SOUND_CLICK);
            }
            CUSTOM_DECREASE_TURNS if self.state == GameState::Editor => {
                self.container.decrease_turns();
                ctx.emit_sound(SOUND_CLICK);
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // Game over hides every control until the level restarts.
        if self.state == GameState::GameOver {
            return;
        }
        let editing = self.state == GameState::Editor;

        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y, button: PointerButton::Primary } => {
                    let point = Vec2::new(x, y);
                    if editing {
                        self.container.insert_molecule(point, self.selected_color);
                    } else if self.state == GameState::Play {
                        self.fill_at(point, ctx);
                    }
                }
                InputEvent::PointerDown { x, y, button: PointerButton::Secondary } if editing => {
                    self.paint_at(Vec2::new(x, y));
                }
                InputEvent::PointerMove { x, y } if editing => {
                    if input.key_held(Key::Shift) {
                        self.container.set_radius(Vec2::new(x, y).length());
                    }
                    if input.button_held(PointerButton::Secondary) {
                        self.paint_at(Vec2::new(x, y));
                    }
                }
                InputEvent::KeyDown { key: Key::Space } if editing => {
                    for _ in 0..EDITOR_SPAWN_COUNT {
                        self.container.insert_random(
                            self.selected_color,
                            self.config.default_container_radius,
                            &mut ctx.rng,
                        );
                    }
                }
                InputEvent::KeyDown { key: Key::S } if editing => self.save_level(ctx),
                InputEvent::KeyDown { key: Key::E } if !self.container.is_filling() => {
                    self.requested_state = if editing { GameState::Play } else { GameState::Editor };
                }
                InputEvent::Custom { kind, a, .. } => self.handle_custom(kind, a, ctx),
                _ => {}
            }
        }
    }

    fn update_game_over(&mut self, dt: f32) {
        self.game_over_elapsed += dt;
        if self.game_over_elapsed > self.config.game_over_delay {
            self.requested_state = GameState::Play;
            self.requested_level = LevelRequest::Reload;
            self.game_over_elapsed = 0.0;
        }
    }

    fn report_turns(&mut self, ctx: &mut EngineContext) {
        let turns = self.container.turns_remaining();
        if self.reported_turns != Some(turns) {
            self.reported_turns = Some(turns);
            ctx.emit_event(GameEvent::new(EVENT_TURNS, turns as f32, 0.0, 0.0));
        }
    }
}

impl Game for PuddleGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let first = self.progress.num_completed_levels;
        self.start_level(first, ctx);
        self.report_turns(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let dt = ctx.dt;

        self.apply_requests(ctx);
        self.handle_input(ctx, input);

        self.container.simulate(dt, &mut ctx.rng);

        match self.state {
            GameState::Play => match self.container.evaluate(dt) {
                ContainerStatus::Solved => self.requested_state = GameState::Win,
                ContainerStatus::OutOfTurns => self.requested_state = GameState::GameOver,
                ContainerStatus::Filling | ContainerStatus::InProgress => {}
            },
            GameState::GameOver => self.update_game_over(dt),
            GameState::Win | GameState::Editor => {}
        }

        let target_fade = if self.state == GameState::GameOver { 1.0 } else { 0.0 };
        self.fade = approach(self.fade, target_fade, 1.0 / self.config.game_over_delay, dt);

        self.report_turns(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{LevelData, MemoryLevels, MoleculeData};

    fn level(molecules: &[(f32, f32, PaletteColor)], turns: u32) -> LevelData {
        LevelData {
            radius: 5.0,
            turns,
            molecules: molecules
                .iter()
                .map(|&(x, y, color)| MoleculeData { x, y, color })
                .collect(),
        }
    }

    fn two_tone() -> LevelData {
        level(&[(0.0, 0.0, PaletteColor::RED), (0.9, 0.0, PaletteColor::BLUE)], 2)
    }

    fn started(levels: MemoryLevels, progress: Progress) -> (PuddleGame, EngineContext) {
        let mut game = PuddleGame::new(levels, progress, PuddleConfig::default()).with_seed(1);
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn step(game: &mut PuddleGame, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input);
    }

    fn custom(kind: u32, a: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { x, y, button: PointerButton::Primary }
    }

    #[test]
    fn init_starts_at_first_unfinished_level() {
        let levels = MemoryLevels::new(vec![two_tone(), two_tone(), two_tone()]);
        let (game, _) = started(levels, Progress { num_completed_levels: 2 });
        assert_eq!(game.level_index(), 2);
        assert_eq!(game.state(), GameState::Play);
    }

    #[test]
    fn missing_level_opens_editor() {
        let (game, ctx) = started(MemoryLevels::blank(1), Progress::default());
        assert_eq!(game.state(), GameState::Editor);
        assert!(game.container().molecules().is_empty());
        assert_eq!(game.turns_remaining(), PuddleConfig::default().default_turns);
        assert!(ctx.events.iter().any(|e| e.kind_id() == EVENT_STATE));
    }

    #[test]
    fn win_is_applied_on_the_following_tick() {
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![two_tone(), two_tone()]), Progress::default());
        step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, 4.0), click(0.0, 0.0)]);
        assert_eq!(game.turns_remaining(), 1);
        assert!(ctx.sounds.iter().any(|s| SOUND_FILL.contains(s)));

        // Recolor still has to land before evaluation.
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.requested_state(), GameState::Win);
        assert_eq!(game.state(), GameState::Play);

        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.state(), GameState::Win);
        assert!(ctx.sounds.contains(&SOUND_WIN));
        assert_eq!(game.progress().num_completed_levels, 1);
        assert!(game.is_next_level_available());
    }

    #[test]
    fn color_selection_refused_while_filling() {
        let many = level(
            &(0..12).map(|i| (i as f32 * 0.3 - 1.8, 0.0, PaletteColor::RED)).collect::<Vec<_>>(),
            3,
        );
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![many]), Progress::default());
        step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, 3.0), click(-1.8, 0.0)]);
        assert!(game.is_filling());

        step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, 5.0)]);
        assert_eq!(game.selected_color(), PaletteColor::GREEN);
        assert!(ctx.sounds.contains(&SOUND_FAIL));
    }

    #[test]
    fn second_fill_refused_while_filling() {
        let many = level(
            &(0..12).map(|i| (i as f32 * 0.3 - 1.8, 0.0, PaletteColor::RED)).collect::<Vec<_>>(),
            3,
        );
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![many]), Progress::default());
        step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, 3.0), click(-1.8, 0.0)]);
        step(&mut game, &mut ctx, &[click(1.5, 0.0)]);
        assert_eq!(game.turns_remaining(), 2);
    }

    #[test]
    fn next_level_needs_completion_outside_editor() {
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![two_tone(), two_tone()]), Progress::default());
        assert!(!game.is_next_level_available());
        assert!(!game.is_prev_level_available());
        step(&mut game, &mut ctx, &[custom(CUSTOM_NEXT_LEVEL, 0.0)]);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.level_index(), 0);

        step(&mut game, &mut ctx, &[InputEvent::KeyDown { key: Key::E }]);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.state(), GameState::Editor);
        assert!(game.is_next_level_available());
        step(&mut game, &mut ctx, &[custom(CUSTOM_NEXT_LEVEL, 0.0)]);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.level_index(), 1);
        assert!(game.is_prev_level_available());
        assert!(!game.is_next_level_available());
    }

    #[test]
    fn editor_edits_container() {
        let (mut game, mut ctx) = started(MemoryLevels::blank(1), Progress::default());
        assert_eq!(game.state(), GameState::Editor);

        step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, 2.0), click(1.0, 1.0)]);
        assert_eq!(game.container().molecules().len(), 1);
        assert_eq!(game.container().molecules()[0].color, PaletteColor::YELLOW);

        step(&mut game, &mut ctx, &[InputEvent::KeyDown { key: Key::Space }]);
        assert_eq!(game.container().molecules().len(), 6);

        let pos = game.container().molecules()[0].pos;
        step(
            &mut game,
            &mut ctx,
            &[
                custom(CUSTOM_SELECT_COLOR, 6.0),
                InputEvent::PointerDown { x: pos.x, y: pos.y, button: PointerButton::Secondary },
            ],
        );
        assert_eq!(game.container().molecules()[0].color, PaletteColor::VIOLET);

        step(&mut game, &mut ctx, &[custom(CUSTOM_DECREASE_TURNS, 0.0)]);
        step(&mut game, &mut ctx, &[custom(CUSTOM_DECREASE_TURNS, 0.0)]);
        step(&mut game, &mut ctx, &[custom(CUSTOM_DECREASE_TURNS, 0.0)]);
        step(&mut game, &mut ctx, &[custom(CUSTOM_DECREASE_TURNS, 0.0)]);
        step(&mut game, &mut ctx, &[custom(CUSTOM_DECREASE_TURNS, 0.0)]);
        assert_eq!(game.turns_remaining(), 1);
        step(&mut game, &mut ctx, &[custom(CUSTOM_INCREASE_TURNS, 0.0)]);
        assert_eq!(game.turns_remaining(), 2);
    }

    #[test]
    fn shift_drag_resizes_in_editor() {
        let (mut game, mut ctx) = started(MemoryLevels::blank(1), Progress::default());
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key: Key::Shift });
        input.push(InputEvent::PointerMove { x: 0.0, y: 3.0 });
        game.update(&mut ctx, &input);
        assert!((game.container().radius() - 3.0).abs() < 1e-5);

        input.drain();
        input.push(InputEvent::PointerMove { x: 6.0, y: 8.0 });
        game.update(&mut ctx, &input);
        assert!((game.container().radius() - 10.0).abs() < 1e-5);

        input.drain();
        input.push(InputEvent::KeyUp { key: Key::Shift });
        input.push(InputEvent::PointerMove { x: 1.0, y: 0.0 });
        game.update(&mut ctx, &input);
        assert!((game.container().radius() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn save_writes_back_to_store() {
        let (mut game, mut ctx) = started(MemoryLevels::blank(1), Progress::default());
        step(&mut game, &mut ctx, &[click(0.5, 0.5), InputEvent::KeyDown { key: Key::S }]);
        assert!(ctx.events.iter().any(|e| e.kind_id() == EVENT_LEVEL_SAVED));
        let saved = game.levels.load(0).unwrap();
        assert_eq!(saved.molecules.len(), 1);
    }

    #[test]
    fn fade_rises_in_game_over() {
        let out_of_turns = level(&[(0.0, 0.0, PaletteColor::RED), (3.0, 0.0, PaletteColor::BLUE)], 1);
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![out_of_turns]), Progress::default());
        step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, 3.0), click(0.0, 0.0)]);
        for _ in 0..3 {
            step(&mut game, &mut ctx, &[]);
        }
        assert_eq!(game.state(), GameState::GameOver);
        let before = game.fade();
        step(&mut game, &mut ctx, &[]);
        assert!(game.fade() > before);
        assert!(game.fade() <= 1.0);
    }

    #[test]
    fn fill_sound_never_repeats() {
        let apart = level(&[(0.0, 0.0, PaletteColor::RED), (3.0, 0.0, PaletteColor::GREEN)], 20);
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![apart]), Progress::default());
        let mut played = Vec::new();
        for i in 0..12 {
            let color = if i % 2 == 0 { 4.0 } else { 0.0 };
            step(&mut game, &mut ctx, &[custom(CUSTOM_SELECT_COLOR, color), click(0.0, 0.0)]);
            let fill: Vec<_> = ctx.sounds.iter().filter(|s| SOUND_FILL.contains(s)).copied().collect();
            assert_eq!(fill.len(), 1, "fill {} played {:?}", i, fill);
            played.push(fill[0]);
        }
        assert_eq!(game.turns_remaining(), 8);
        assert!(played.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn secondary_drag_paints_in_editor() {
        let row = level(
            &[(-2.0, 0.0, PaletteColor::RED), (0.0, 0.0, PaletteColor::RED), (2.0, 0.0, PaletteColor::RED)],
            3,
        );
        let (mut game, mut ctx) = started(MemoryLevels::new(vec![row]), Progress::default());
        step(&mut game, &mut ctx, &[InputEvent::KeyDown { key: Key::E }, custom(CUSTOM_SELECT_COLOR, 5.0)]);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.state(), GameState::Editor);

        let at = |game: &PuddleGame, i: usize| game.container().molecules()[i].pos;
        let mut input = InputQueue::new();
        let (p0, p1) = (at(&game, 0), at(&game, 1));
        input.push(InputEvent::PointerDown { x: p0.x, y: p0.y, button: PointerButton::Secondary });
        input.push(InputEvent::PointerMove { x: p1.x, y: p1.y });
        game.update(&mut ctx, &input);
        input.drain();

        input.push(InputEvent::PointerUp { x: p1.x, y: p1.y, button: PointerButton::Secondary });
        let p2 = at(&game, 2);
        input.push(InputEvent::PointerMove { x: p2.x, y: p2.y });
        game.update(&mut ctx, &input);

        let colors: Vec<_> = game.container().molecules().iter().map(|m| m.color).collect();
        assert_eq!(colors, vec![PaletteColor::INDIGO, PaletteColor::INDIGO, PaletteColor::RED]);
    }
}
