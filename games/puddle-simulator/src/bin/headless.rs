//! Plays the bundled levels without a renderer.
//!
//! Usage: `puddle-headless [LEVEL_INDEX_FILE] [PROGRESS_FILE] [CONFIG_FILE]`
//!
//! Each turn the bot fills from the first molecule with the most common other color.
//! Set `RUST_LOG=debug` to see every fill.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use puddle_engine::{GameRunner, InputEvent, PointerButton};
use puddle_simulator::game::{CUSTOM_NEXT_LEVEL, CUSTOM_SELECT_COLOR};
use puddle_simulator::{
    DirectoryLevels, GameState, LevelStore, PaletteColor, Progress, PuddleConfig, PuddleError,
    PuddleGame,
};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames to give one level before giving up on it.
const MAX_FRAMES_PER_LEVEL: u32 = 60 * 60;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let index_file = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/levels.txt")));
    let progress_file = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("puddle-progress.json"));
    let config_file = args.next().map(PathBuf::from);

    match run(index_file, progress_file, config_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<PathBuf>) -> puddle_simulator::Result<PuddleConfig> {
    let Some(path) = path else {
        return Ok(PuddleConfig::default());
    };
    let text = fs::read_to_string(&path).map_err(|source| PuddleError::Io { path: path.clone(), source })?;
    let config = PuddleConfig::from_json(&text).map_err(|source| PuddleError::Json { path: path.clone(), source })?;
    log::info!("config loaded from {}", path.display());
    Ok(config)
}

fn run(index_file: PathBuf, progress_file: PathBuf, config_file: Option<PathBuf>) -> puddle_simulator::Result<()> {
    let config = load_config(config_file)?;
    let levels = DirectoryLevels::open(&index_file)?;
    let count = levels.level_count();
    if count == 0 {
        log::warn!("{} lists no levels", index_file.display());
        return Ok(());
    }
    let progress = Progress::load(&progress_file, count)?;
    log::info!("resuming after {} completed levels", progress.num_completed_levels);

    let game = PuddleGame::new(levels, progress, config).with_seed(7);
    let mut runner = GameRunner::new(game);
    runner.init();

    let mut played = 0;
    while played < count {
        let index = runner.game().level_index();
        let outcome = play_level(&mut runner);
        log::info!("level {}: {:?}", index + 1, outcome);
        played += 1;

        if !runner.game().is_next_level_available() {
            break;
        }
        runner.push_input(InputEvent::Custom {
            kind: CUSTOM_NEXT_LEVEL,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        // One frame to request the move, one to apply it.
        runner.tick(FRAME_DT);
        runner.tick(FRAME_DT);
    }

    let progress = runner.game().progress();
    progress.save(&progress_file)?;
    log::info!(
        "{} of {} levels completed, progress saved to {}",
        progress.num_completed_levels,
        count,
        progress_file.display()
    );
    Ok(())
}

fn play_level(runner: &mut GameRunner<PuddleGame>) -> GameState {
    let mut game_overs = 0;
    let mut last_state = runner.game().state();
    for _ in 0..MAX_FRAMES_PER_LEVEL {
        let game = runner.game();
        let state = game.state();
        if state == GameState::GameOver && last_state != GameState::GameOver {
            game_overs += 1;
        }
        last_state = state;

        match state {
            GameState::Win | GameState::Editor => return state,
            // One retry; the level reloads by itself after game over.
            GameState::GameOver if game_overs > 1 => return state,
            GameState::GameOver => {}
            GameState::Play => {
                let can_fill = game.turns_remaining() > 0 && !game.is_filling();
                if game.requested_state() == GameState::Play && can_fill {
                    if let Some(events) = choose_move(game) {
                        for e in events {
                            runner.push_input(e);
                        }
                    }
                }
            }
        }
        runner.tick(FRAME_DT);
    }
    runner.game().state()
}

/// Fill from the first molecule with the most common color it doesn't have.
fn choose_move(game: &PuddleGame) -> Option<[InputEvent; 2]> {
    let molecules = game.container().molecules();
    let first = molecules.first()?;
    let mut counts = [0usize; PaletteColor::ALL.len()];
    for m in molecules.iter().filter(|m| m.color != first.color) {
        counts[m.color.index() as usize] += 1;
    }
    let (best, _) = counts
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .max_by_key(|(_, n)| **n)?;
    Some([
        InputEvent::Custom { kind: CUSTOM_SELECT_COLOR, a: best as f32, b: 0.0, c: 0.0 },
        InputEvent::PointerDown { x: first.pos.x, y: first.pos.y, button: PointerButton::Primary },
    ])
}
