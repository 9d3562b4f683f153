//! Command-line interface for training and inspecting MENACE tables

pub mod commands;
pub mod output;
