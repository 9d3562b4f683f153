//! In-memory table repository for testing.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    error::Error,
    ports::TableRepository,
    state_space::{StateSpace, TableSnapshot},
};

/// Keeps serialized snapshots in a shared map keyed by path.
///
/// Clones share the same storage.
///
/// # Examples
///
/// ```
/// use magic_menace::adapters::InMemoryRepository;
/// use magic_menace::ports::TableRepository;
/// use magic_menace::StateSpace;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let space = StateSpace::new();
///
/// repo.save(&space, Path::new("table"))?;
/// let loaded = repo.load(Path::new("table"))?;
/// assert_eq!(loaded.len(), space.len());
/// # Ok::<(), magic_menace::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tables
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains_key(&key(path))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl TableRepository for InMemoryRepository {
    fn save(&self, space: &StateSpace, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec(&space.snapshot()).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize table for in-memory storage".to_string(),
                message: e.to_string(),
            }
        })?;
        self.lock().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StateSpace> {
        let storage = self.lock();
        let bytes = storage.get(&key(path)).ok_or_else(|| Error::Io {
            operation: format!("load table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        let snapshot: TableSnapshot =
            rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize table from in-memory storage".to_string(),
                message: e.to_string(),
            })?;
        StateSpace::from_snapshot(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let mut space = StateSpace::new();
        let opening = BoardState::from_moves(&[5, 2]).unwrap();
        space.require_mut(&opening).unwrap().add(6, 1);

        let path = Path::new("session");
        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&space, path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        let loaded = repo.load(path).unwrap();
        assert_eq!(loaded.matchbox(&opening).unwrap().count(6), 1);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save(&StateSpace::new(), Path::new("shared")).unwrap();
        assert!(repo2.contains(Path::new("shared")));
        assert_eq!(repo2.count(), 1);
    }
}
