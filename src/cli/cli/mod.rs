//! Argument parsing and command dispatch

pub mod app;
pub mod commands;

pub use app::{Cli, Commands, ResolvedConfig};
