use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PuddleError, Result};
use crate::molecule::PaletteColor;

/// One molecule as stored in a level file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoleculeData {
    pub x: f32,
    pub y: f32,
    pub color: PaletteColor,
}

/// A level: container size, turn count and starting molecules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub radius: f32,
    pub turns: u32,
    #[serde(default)]
    pub molecules: Vec<MoleculeData>,
}

impl LevelData {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Where levels come from. The game only sees indices.
pub trait LevelStore {
    /// Number of levels. The game assumes at least one.
    fn level_count(&self) -> usize;

    fn load(&self, index: usize) -> Result<LevelData>;

    fn save(&mut self, index: usize, level: &LevelData) -> Result<()>;
}

/// Levels kept in memory. Useful for tests and hosts that bundle level data.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevels {
    levels: Vec<Option<LevelData>>,
}

impl MemoryLevels {
    pub fn new(levels: Vec<LevelData>) -> Self {
        Self { levels: levels.into_iter().map(Some).collect() }
    }

    /// `count` slots with nothing stored yet; loading any of them fails.
    pub fn blank(count: usize) -> Self {
        Self { levels: vec![None; count] }
    }
}

impl LevelStore for MemoryLevels {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn load(&self, index: usize) -> Result<LevelData> {
        match self.levels.get(index) {
            Some(Some(level)) => Ok(level.clone()),
            _ => Err(PuddleError::LevelOutOfRange { index, count: self.levels.len() }),
        }
    }

    fn save(&mut self, index: usize, level: &LevelData) -> Result<()> {
        let count = self.levels.len();
        let slot = self
            .levels
            .get_mut(index)
            .ok_or(PuddleError::LevelOutOfRange { index, count })?;
        *slot = Some(level.clone());
        Ok(())
    }
}

/// Levels stored as JSON files next to an index file listing one file name per line.
#[derive(Debug, Clone)]
pub struct DirectoryLevels {
    dir: PathBuf,
    files: Vec<String>,
}

impl DirectoryLevels {
    /// Read the index file. Blank lines are skipped.
    pub fn open(index_file: impl AsRef<Path>) -> Result<Self> {
        let index_file = index_file.as_ref();
        let text = fs::read_to_string(index_file).map_err(|e| PuddleError::io(index_file, e))?;
        let files: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        let dir = index_file.parent().map(Path::to_path_buf).unwrap_or_default();
        log::info!("level index {}: {} levels", index_file.display(), files.len());
        Ok(Self { dir, files })
    }

    pub fn path(&self, index: usize) -> Option<PathBuf> {
        self.files.get(index).map(|name| self.dir.join(name))
    }

    fn checked_path(&self, index: usize) -> Result<PathBuf> {
        self.path(index)
            .ok_or(PuddleError::LevelOutOfRange { index, count: self.files.len() })
    }
}

impl LevelStore for DirectoryLevels {
    fn level_count(&self) -> usize {
        self.files.len()
    }

    fn load(&self, index: usize) -> Result<LevelData> {
        let path = self.checked_path(index)?;
        let text = fs::read_to_string(&path).map_err(|e| PuddleError::io(&path, e))?;
        LevelData::from_json(&text).map_err(|e| PuddleError::json(&path, e))
    }

    fn save(&mut self, index: usize, level: &LevelData) -> Result<()> {
        let path = self.checked_path(index)?;
        let json = level.to_json().map_err(|e| PuddleError::json(&path, e))?;
        fs::write(&path, json).map_err(|e| PuddleError::io(&path, e))
    }
}
