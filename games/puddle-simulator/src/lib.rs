//! Puddle Simulator: flood colored molecules until the whole puddle is one color.

pub mod config;
pub mod container;
pub mod error;
pub mod fill;
pub mod game;
pub mod level;
pub mod molecule;
pub mod physics;
pub mod progress;

pub use config::PuddleConfig;
pub use container::Container;
pub use error::{PuddleError, Result};
pub use fill::{flood_fill, RecolorQueue};
pub use game::{GameState, LevelRequest, PuddleGame};
pub use level::{DirectoryLevels, LevelData, LevelStore, MemoryLevels, MoleculeData};
pub use molecule::{Molecule, PaletteColor, MOLECULE_RADIUS};
pub use physics::{simulate, PhysicsSolver};
pub use progress::Progress;
