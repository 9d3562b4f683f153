//! Ports (trait boundaries) for external dependencies.
//!
//! The engine owns these traits; storage formats and training observers
//! implement them in outer layers.

pub mod observer;
pub mod repository;

pub use observer::Observer;
pub use repository::TableRepository;
