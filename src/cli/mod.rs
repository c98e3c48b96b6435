//! Command-line interface for queue-view.
//!
//! This module provides commands for running the live queue demo and
//! inspecting configuration and queue snapshots.

mod commands;

pub use commands::{Cli, Commands, run_command};
