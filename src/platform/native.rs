//! Native host capabilities
//!
//! There is no window natively: frames go to a `DrawList`, sounds to the log,
//! and the high score to a small JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audio::{AudioSink, Sound};
use crate::highscore::ScoreStore;
use crate::settings::AudioSettings;

/// Key/value store backed by a JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`; a missing or corrupt file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read(&path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Cannot read {} ({e}), starting empty", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read(path: &Path) -> io::Result<BTreeMap<String, String>> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write() {
            log::warn!("Failed to write {} ({e})", self.path.display());
        }
    }
}

/// Sound backend that logs triggers instead of playing them
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    muted: bool,
    /// Triggers per sound, in `Sound::ALL` order
    pub counts: [u32; 3],
}

impl LogAudio {
    pub fn new(settings: &AudioSettings) -> Self {
        Self {
            muted: settings.muted,
            counts: [0; 3],
        }
    }

    pub fn count(&self, sound: Sound) -> u32 {
        self.counts[sound as usize]
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound) {
        if self.muted {
            return;
        }
        self.counts[sound as usize] += 1;
        log::debug!("Play {}", sound.as_str());
    }
}
