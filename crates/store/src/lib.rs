//! High-score persistence module.
//!
//! The only durable state in the game is a single non-negative integer: the
//! all-time high score. It is stored as plain text in one file. A missing or
//! unparsable file reads as 0 — persistence being unavailable is never an
//! error, it just means no high score has been recorded yet.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name used under the default location.
const HIGH_SCORE_FILE: &str = ".tui-snake-highscore";

/// File-backed high-score store.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's home directory, falling back to the current
    /// working directory when no home is available.
    pub fn default_path() -> Self {
        let dir = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(HIGH_SCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted high score.
    ///
    /// Returns 0 when the file is absent, unreadable, or does not contain a
    /// non-negative integer.
    pub fn get(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrite the persisted high score.
    pub fn set(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }

    /// Record a finished session's score.
    ///
    /// Persists the score only when it beats the stored one; returns the
    /// resulting high score either way. The stored value only ever moves up.
    pub fn record(&self, score: u32) -> Result<u32> {
        let best = self.get();
        if score > best {
            self.set(score)?;
            Ok(score)
        } else {
            Ok(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A store under a unique temp path, cleaned up on drop.
    struct TempStore {
        store: HighScoreStore,
    }

    impl TempStore {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "tui-snake-store-test-{}-{}",
                tag,
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self {
                store: HighScoreStore::new(path),
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(self.store.path());
        }
    }

    #[test]
    fn test_missing_file_reads_as_zero() {
        let t = TempStore::new("missing");
        assert_eq!(t.store.get(), 0);
    }

    #[test]
    fn test_unparsable_file_reads_as_zero() {
        let t = TempStore::new("garbage");
        fs::write(t.store.path(), "not a number").unwrap();
        assert_eq!(t.store.get(), 0);

        fs::write(t.store.path(), "-5").unwrap();
        assert_eq!(t.store.get(), 0);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let t = TempStore::new("roundtrip");
        t.store.set(42).unwrap();
        assert_eq!(t.store.get(), 42);
    }

    #[test]
    fn test_get_tolerates_trailing_whitespace() {
        let t = TempStore::new("whitespace");
        fs::write(t.store.path(), "17\n").unwrap();
        assert_eq!(t.store.get(), 17);
    }

    #[test]
    fn test_record_only_moves_upward() {
        let t = TempStore::new("record");
        t.store.set(5).unwrap();

        // A session ending with 7 bumps the stored 5 to 7; a later
        // session ending with 3 leaves it at 7.
        assert_eq!(t.store.record(7).unwrap(), 7);
        assert_eq!(t.store.get(), 7);
        assert_eq!(t.store.record(3).unwrap(), 7);
        assert_eq!(t.store.get(), 7);
    }

    #[test]
    fn test_record_on_fresh_store_writes_first_score() {
        let t = TempStore::new("fresh");
        assert_eq!(t.store.record(1).unwrap(), 1);
        assert_eq!(t.store.get(), 1);
    }
}
