//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod cli;
pub(crate) mod dataset_args;
pub mod patches_command;
pub mod roi_command;
pub mod tile_command;
#[cfg(test)]
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use cli::build_cli;
pub use patches_command::PatchesCommand;
pub use roi_command::RoiCommand;
pub use tile_command::TileCommand;

use clap::ArgMatches;
use crate::errors::{DatasetError, DatasetResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct OilpatchCommandFactory;

impl OilpatchCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        OilpatchCommandFactory
    }
}

impl Default for OilpatchCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for OilpatchCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> DatasetResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("patches", sub_args)) => Ok(Box::new(PatchesCommand::new(sub_args, logger)?)),
            Some(("roi", sub_args)) => Ok(Box::new(RoiCommand::new(sub_args, logger)?)),
            Some(("tile", sub_args)) => Ok(Box::new(TileCommand::new(sub_args, logger)?)),
            Some((name, _)) => Err(DatasetError::GenericError(format!("Unknown command: {}", name))),
            None => Err(DatasetError::GenericError("No command given".to_string())),
        }
    }
}
