//! Persisted high score
//!
//! A single non-negative integer kept under the `"highscore"` key of a
//! string key/value store (LocalStorage on the web, a JSON file natively).

use std::collections::HashMap;

/// Storage key for the high score
pub const HIGH_SCORE_KEY: &str = "highscore";

/// Minimal string key/value store.
///
/// Writes are synchronous; implementations log failures instead of
/// returning them.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub entries: HashMap<String, String>,
    /// Number of `set` calls seen
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(score: u32) -> Self {
        let mut store = Self::new();
        store.entries.insert(HIGH_SCORE_KEY.to_string(), score.to_string());
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Load the high score, 0 when absent or unreadable
pub fn load_high_score<S: ScoreStore + ?Sized>(store: &S) -> u32 {
    match store.get(HIGH_SCORE_KEY) {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded high score {score}");
                score
            }
            Err(_) => {
                log::warn!("Ignoring unreadable high score {raw:?}");
                0
            }
        },
        None => {
            log::info!("No high score found, starting fresh");
            0
        }
    }
}

/// Persist a new high score
pub fn save_high_score<S: ScoreStore + ?Sized>(store: &mut S, score: u32) {
    store.set(HIGH_SCORE_KEY, &score.to_string());
    log::info!("High score saved ({score})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_zero() {
        assert_eq!(load_high_score(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        save_high_score(&mut store, 13);
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("13"));
        assert_eq!(load_high_score(&store), 13);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_garbage_is_zero() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "lots");
        assert_eq!(load_high_score(&store), 0);
        store.set(HIGH_SCORE_KEY, "-4");
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, " 12\n");
        assert_eq!(load_high_score(&store), 12);
    }
}
