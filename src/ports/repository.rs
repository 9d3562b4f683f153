//! Repository port for learned-table persistence.

use std::path::Path;

use crate::{Result, state_space::StateSpace};

/// Port for persisting and loading the learned table.
///
/// Implementations store a [`crate::state_space::TableSnapshot`] and rebuild
/// the full [`StateSpace`] on load, so the key set always comes from the
/// enumeration rather than from disk.
///
/// # Examples
///
/// ```no_run
/// use magic_menace::{StateSpace, ports::TableRepository};
/// use std::path::Path;
///
/// fn save_table<R: TableRepository>(
///     repo: &R,
///     space: &StateSpace,
///     path: &Path,
/// ) -> magic_menace::Result<()> {
///     repo.save(space, path)
/// }
/// ```
pub trait TableRepository {
    /// Save the learned matchboxes of `space`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be written or serialization fails.
    fn save(&self, space: &StateSpace, path: &Path) -> Result<()>;

    /// Load a table saved with [`Self::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, is not a valid
    /// snapshot, or names a board state outside the enumeration.
    fn load(&self, path: &Path) -> Result<StateSpace>;
}
