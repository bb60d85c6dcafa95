//! Storage backends for the event ledger.
//!
//! A store reads and writes the whole event collection at once; there are no
//! partial updates. The daily decay stamp is kept separately so the event
//! array layout stays a plain list of records.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::event::{DecayStamp, OngoingEvent};

/// Read-all/write-all persistence for ongoing events.
pub trait LedgerStore {
    /// Load every stored event. A store with nothing saved yet returns an empty list.
    fn load(&self) -> LedgerResult<Vec<OngoingEvent>>;

    /// Replace the stored collection.
    fn save(&mut self, events: &[OngoingEvent]) -> LedgerResult<()>;

    /// Load the most recent decay stamp, if any.
    fn load_stamp(&self) -> LedgerResult<Option<DecayStamp>>;

    /// Replace the decay stamp.
    fn save_stamp(&mut self, stamp: &DecayStamp) -> LedgerResult<()>;
}

/// In-memory store, used in tests and for one-off rolls without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<OngoingEvent>,
    stamp: Option<DecayStamp>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with events.
    pub fn with_events(events: Vec<OngoingEvent>) -> Self {
        Self {
            events,
            stamp: None,
        }
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> LedgerResult<Vec<OngoingEvent>> {
        Ok(self.events.clone())
    }

    fn save(&mut self, events: &[OngoingEvent]) -> LedgerResult<()> {
        self.events = events.to_vec();
        Ok(())
    }

    fn load_stamp(&self) -> LedgerResult<Option<DecayStamp>> {
        Ok(self.stamp.clone())
    }

    fn save_stamp(&mut self, stamp: &DecayStamp) -> LedgerResult<()> {
        self.stamp = Some(stamp.clone());
        Ok(())
    }
}

/// JSON file store.
///
/// Events live in a pretty-printed JSON array at `path`; the decay stamp in a
/// sibling file with a `.stamp.json` suffix. Missing files read as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    stamp_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stamp_path = stamp_path_for(&path);
        Self { path, stamp_path }
    }

    /// Path of the events file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the decay stamp file.
    pub fn stamp_path(&self) -> &Path {
        &self.stamp_path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> LedgerResult<Vec<OngoingEvent>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn save(&mut self, events: &[OngoingEvent]) -> LedgerResult<()> {
        write_json(&self.path, events)
    }

    fn load_stamp(&self) -> LedgerResult<Option<DecayStamp>> {
        read_json(&self.stamp_path)
    }

    fn save_stamp(&mut self, stamp: &DecayStamp) -> LedgerResult<()> {
        write_json(&self.stamp_path, stamp)
    }
}

fn stamp_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ledger".to_string());
    path.with_file_name(format!("{stem}.stamp.json"))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> LedgerResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path).map_err(|source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(serde_json::from_str(&data)?))
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> LedgerResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    })
}
