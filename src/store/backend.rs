//! Key-value media the durable record can live in

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A durable key-value medium holding serialized records
pub trait StorageBackend {
    /// Load the record stored under `key`, or `None` if there is none
    ///
    /// # Errors
    /// Returns an error if the medium cannot be read.
    fn load(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous record in full
    ///
    /// # Errors
    /// Returns an error if the medium cannot be written.
    fn save(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores each record as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The per-user data directory, e.g. `~/.local/share/wordham`
    ///
    /// Returns `None` if the platform has no such directory.
    #[must_use]
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("wordham")))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write then rename so a crash never leaves a half-written record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

/// In-memory records, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: FxHashMap<String, String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend already holding `value` under `key`
    #[must_use]
    pub fn with_record(key: &str, value: impl Into<String>) -> Self {
        let mut backend = Self::new();
        backend.records.insert(key.to_string(), value.into());
        backend
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
