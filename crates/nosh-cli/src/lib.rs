//! Nosh CLI library.
//!
//! This library provides the core functionality for the nosh command-line
//! interface, including configuration management, command execution,
//! output formatting and the interactive session.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;
