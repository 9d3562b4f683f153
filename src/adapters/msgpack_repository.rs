//! MessagePack implementation of the table repository.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{
    Result,
    error::Error,
    ports::TableRepository,
    state_space::{StateSpace, TableSnapshot},
};

/// Stores table snapshots as MessagePack files via `rmp_serde`.
///
/// # Examples
///
/// ```no_run
/// use magic_menace::adapters::MsgPackRepository;
/// use magic_menace::ports::TableRepository;
/// use magic_menace::StateSpace;
/// use std::path::Path;
///
/// let repo = MsgPackRepository::new();
/// let space = StateSpace::new();
///
/// repo.save(&space, Path::new("menace.msgpack"))?;
/// let loaded = repo.load(Path::new("menace.msgpack"))?;
/// # Ok::<(), magic_menace::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl TableRepository for MsgPackRepository {
    fn save(&self, space: &StateSpace, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let snapshot = space.snapshot();
        rmp_serde::encode::write(&mut writer, &snapshot).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize table to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;
        log::info!(
            "saved {} learned board state(s) to {}",
            snapshot.entries.len(),
            path.display()
        );

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StateSpace> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let snapshot: TableSnapshot = rmp_serde::decode::from_read(BufReader::new(file))
            .map_err(|e| Error::SerializationContext {
                operation: "deserialize table from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        StateSpace::from_snapshot(&snapshot)
    }
}
