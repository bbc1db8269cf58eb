//! Subcommand interfaces
//!
//! Each `oilpatch` subcommand (`patches`, `roi`, `tile`) becomes a
//! [`Command`] that owns its resolved configuration, folders and rules, so
//! argument errors surface before any file is read or written.

use crate::utils::logger::Logger;
use crate::errors::DatasetResult;

/// A fully configured dataset job
///
/// `patches` writes class-balanced image/mask patches, `roi` writes tiles
/// of a single class, and `tile` cuts video frames into a fixed grid.
pub trait Command {
    /// Run the job over its input folder
    ///
    /// Unreadable pairs or frames are logged and counted as skipped; only
    /// errors that stop the whole job (missing input folder, unwritable
    /// output folder) are returned.
    fn execute(&self) -> DatasetResult<()>;
}

/// Builds the job for the subcommand selected on the command line
pub trait CommandFactory<'a> {
    /// Resolve `--config` and flags into a job
    ///
    /// # Arguments
    /// * `args` - Top-level matches of [`build_cli`](crate::commands::build_cli)
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// The job, or an error when a folder is missing or the settings are
    /// unusable (conflicting thresholds, unknown class, zero tile size)
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> DatasetResult<Box<dyn Command + 'a>>;
}
