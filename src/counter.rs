//! Import counter persistence
//!
//! One JSON object file mapping package names to cumulative qualifying
//! import counts. A missing file reads as an empty map; malformed JSON
//! propagates as an error rather than resetting state. Writes replace
//! the whole file. Single-process access is assumed: no locking, no
//! atomic rename, concurrent writers race with last-writer-wins.

use crate::error::CounterError;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the persisted counter map
pub const COUNTER_FILE: &str = "metadata.json";

/// Persistent store for per-package import counts
#[derive(Debug, Clone)]
pub struct CounterStore {
    path: PathBuf,
}

impl CounterStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default per-user location
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Default counter file path
    pub fn default_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("support-banner").join(COUNTER_FILE)
        } else {
            PathBuf::from(COUNTER_FILE)
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full counter map
    ///
    /// # Errors
    /// Returns `CounterError::Corrupt` if the file exists but is not
    /// valid JSON, or `CounterError::Io` for any other read failure.
    pub fn load(&self) -> Result<HashMap<String, u64>, CounterError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(CounterError::Io(e)),
        };

        serde_json::from_str(&contents).map_err(|source| CounterError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Write the full counter map, replacing the file
    pub fn save(&self, counters: &HashMap<String, u64>) -> Result<(), CounterError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string(counters).map_err(CounterError::Serialize)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Increment the count for a package and persist the result
    ///
    /// An absent entry counts as 0 before the increment. Returns the
    /// new cumulative count.
    pub fn record_import(&self, package_name: &str) -> Result<u64, CounterError> {
        let mut counters = self.load()?;
        let entry = counters.entry(package_name.to_string()).or_insert(0);
        *entry += 1;
        let count = *entry;
        self.save(&counters)?;

        log::debug!("Recorded import #{} for {}", count, package_name);
        Ok(count)
    }

    /// Current persisted count for a package
    pub fn count(&self, package_name: &str) -> Result<u64, CounterError> {
        Ok(self.load()?.get(package_name).copied().unwrap_or(0))
    }
}
