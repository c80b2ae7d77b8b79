//! Terminal adapter for Gallery Picker.
//!
//! Loads configuration, wires the catalog source into the page view and runs
//! an interactive command loop that renders the table and selection summary.

pub mod bootstrap;
pub mod commands;
pub mod render;

pub use bootstrap::{run_app, CliArgs};
