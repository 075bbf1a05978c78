pub mod api;
pub mod core;
pub mod input;
pub mod extensions;
pub mod runner;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{SoundEvent, GameEvent};
pub use core::time::{FixedTimestep, Countdown};
pub use core::rng::Rng;
pub use input::queue::{InputEvent, InputQueue, Key, PointerButton};
pub use extensions::approach;
pub use runner::GameRunner;
