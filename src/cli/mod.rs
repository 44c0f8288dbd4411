//! CLI layer: argument parsing, prompting and command dispatch

pub mod args;
pub mod assessment;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
