//! Command-line presentation layer for the bonus calculator.
//!
//! Owns everything the engine does not: reading flags and configuration,
//! logging, and rendering results as text or JSON.

pub mod cli;
pub mod config;
pub mod render;
pub mod tracing_setup;

pub use cli::{Cli, Command, ComputeArgs};
pub use config::{BonusConfig, OutputFormat};
