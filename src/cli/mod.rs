//! CLI layer - command-line interface over the rental core
//!
//! Parses operator commands with `clap` and hands them to the handlers, which talk to
//! [`crate::core::RentalManager`] and turn results into text.

/// Argument and subcommand definitions
pub mod args;
/// Command execution and output formatting
pub mod handlers;

pub use args::{Cli, Commands, VehicleCommand};
pub use handlers::run;
