//! CLI subcommands

pub mod inspect;
pub mod replay;
pub mod stats;
pub mod train;

use std::path::Path;

use anyhow::{Context, Result};

use crate::{StateSpace, adapters::MsgPackRepository, ports::TableRepository};

/// Load a saved table, or enumerate a fresh one when no path is given.
pub(crate) fn load_or_new(path: Option<&Path>) -> Result<StateSpace> {
    match path {
        Some(path) => MsgPackRepository::new()
            .load(path)
            .with_context(|| format!("loading table from {}", path.display())),
        None => Ok(StateSpace::new()),
    }
}

pub(crate) fn save(space: &StateSpace, path: &Path) -> Result<()> {
    MsgPackRepository::new()
        .save(space, path)
        .with_context(|| format!("saving table to {}", path.display()))
}
