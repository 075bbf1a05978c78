use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PuddleError, Result};

/// Persisted player progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub num_completed_levels: usize,
}

impl Progress {
    /// Load from `path`. A missing file is a fresh start, not an error.
    /// The count is clamped to `[0, level_count)`.
    pub fn load(path: impl AsRef<Path>, level_count: usize) -> Result<Self> {
        let path = path.as_ref();
        let mut progress = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| PuddleError::json(path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no progress file at {}, starting fresh", path.display());
                Progress::default()
            }
            Err(e) => return Err(PuddleError::io(path, e)),
        };
        progress.clamp_to(level_count);
        Ok(progress)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| PuddleError::json(path, e))?;
        fs::write(path, json).map_err(|e| PuddleError::io(path, e))
    }

    pub fn clamp_to(&mut self, level_count: usize) {
        self.num_completed_levels = self.num_completed_levels.min(level_count.saturating_sub(1));
    }

    /// Record a completed level. Never lowers the count and stays inside `[0, level_count)`.
    pub fn complete(&mut self, level_index: usize, level_count: usize) {
        self.num_completed_levels = self.num_completed_levels.max(level_index + 1);
        self.clamp_to(level_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("puddle-progress-{}-{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_is_default() {
        let path = scratch_file("missing");
        assert_eq!(Progress::load(&path, 10).unwrap(), Progress::default());
    }

    #[test]
    fn save_then_load() {
        let path = scratch_file("roundtrip");
        Progress { num_completed_levels: 3 }.save(&path).unwrap();
        assert_eq!(Progress::load(&path, 10).unwrap().num_completed_levels, 3);
    }

    #[test]
    fn load_clamps_to_level_count() {
        let path = scratch_file("clamp");
        fs::write(&path, r#"{ "num_completed_levels": 40 }"#).unwrap();
        assert_eq!(Progress::load(&path, 5).unwrap().num_completed_levels, 4);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_file("bad");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(Progress::load(&path, 5), Err(PuddleError::Json { .. })));
    }

    #[test]
    fn complete_is_a_high_water_mark() {
        let mut p = Progress::default();
        p.complete(2, 10);
        assert_eq!(p.num_completed_levels, 3);
        p.complete(0, 10);
        assert_eq!(p.num_completed_levels, 3);
    }

    #[test]
    fn completing_the_last_level_stays_in_range() {
        let path = scratch_file("last");
        let mut p = Progress { num_completed_levels: 4 };
        p.complete(4, 5);
        assert_eq!(p.num_completed_levels, 4);
        p.save(&path).unwrap();
        let saved: Progress = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.num_completed_levels, 4);
    }
}
