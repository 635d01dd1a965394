use std::collections::HashMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{
    hall_model::Hall, movie_model::Movie, screening_model::Screening, ticket_model::Ticket,
};

/// A complete serialized copy of all four collections at a point in time.
/// Nested entities are inlined by value, so the document is self-contained.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub halls: Vec<Hall>,
    #[serde(default)]
    pub screenings: Vec<Screening>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// Narrow persistence capability: whole-snapshot save and load keyed by a
/// location. Missing data is an expected outcome, not a fault; anything else
/// that goes wrong with the backend propagates as a fatal error.
pub trait DurableStore: Send + Sync {
    fn save(&self, snapshot: &Snapshot, location: &Path) -> Result<()>;
    fn load(&self, location: &Path) -> Result<Option<Snapshot>>;
}

/// JSON file backend, one pretty-printed document per location.
pub struct JsonFileStore;

impl DurableStore for JsonFileStore {
    fn save(&self, snapshot: &Snapshot, location: &Path) -> Result<()> {
        let file = File::create(location)
            .with_context(|| format!("failed to create {}", location.display()))?;
        serde_json::to_writer_pretty(file, snapshot)
            .with_context(|| format!("failed to write snapshot to {}", location.display()))?;
        Ok(())
    }

    fn load(&self, location: &Path) -> Result<Option<Snapshot>> {
        let file = match File::open(location) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to open {}", location.display()))
            }
        };
        let snapshot = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse snapshot at {}", location.display()))?;
        Ok(Some(snapshot))
    }
}

/// In-memory backend for tests: same contract, no filesystem.
#[derive(Default)]
pub struct MemoryStore {
    snapshots: Mutex<HashMap<PathBuf, Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStore for MemoryStore {
    fn save(&self, snapshot: &Snapshot, location: &Path) -> Result<()> {
        self.snapshots
            .lock()
            .expect("memory store poisoned")
            .insert(location.to_path_buf(), snapshot.clone());
        Ok(())
    }

    fn load(&self, location: &Path) -> Result<Option<Snapshot>> {
        Ok(self
            .snapshots
            .lock()
            .expect("memory store poisoned")
            .get(location)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::models::movie_model::Movie;

    use super::{DurableStore, MemoryStore, Snapshot};

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let snapshot = Snapshot {
            movies: vec![Movie::new("Avatar", 162, "Sci-Fi").unwrap()],
            ..Snapshot::default()
        };
        store.save(&snapshot, Path::new("a.json")).unwrap();
        let loaded = store.load(Path::new("a.json")).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn absent_location_is_none() {
        let store = MemoryStore::new();
        assert!(store.load(Path::new("missing.json")).unwrap().is_none());
    }

    #[test]
    fn save_overwrites_prior_content() {
        let store = MemoryStore::new();
        let first = Snapshot {
            movies: vec![Movie::new("Avatar", 162, "Sci-Fi").unwrap()],
            ..Snapshot::default()
        };
        store.save(&first, Path::new("a.json")).unwrap();
        store.save(&Snapshot::default(), Path::new("a.json")).unwrap();
        let loaded = store.load(Path::new("a.json")).unwrap().unwrap();
        assert!(loaded.movies.is_empty());
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"movies": []}"#).unwrap();
        assert!(snapshot.halls.is_empty());
        assert!(snapshot.screenings.is_empty());
        assert!(snapshot.tickets.is_empty());
    }
}
