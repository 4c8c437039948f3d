//! Mixtape CLI Library
//!
//! Command-line front end over the Mixtape catalog: argument parsing,
//! configuration, and text/JSON rendering.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

// Re-export commonly used types for convenience
pub use commands::{execute, Cli, Commands};
pub use config::AppConfig;
pub use error::{CliError, Result};
