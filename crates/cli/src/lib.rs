//! CLI tool for inspecting flow keys.
//!
//! Provides commands for:
//! - Parsing and rendering addresses, endpoints and flows
//! - Converting addresses to the big-endian `in_addr` layout
//! - Sorting flows in table key order
//! - Computing stable and symmetric flow hashes

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
