// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors returned when constructing a [`Logger`](crate::Logger).
///
/// Logging itself never fails; only construction can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LoggerError {
    /// A different subsystem is already bound for this process.
    ///
    /// The bound subsystem is left untouched.
    #[error(
        "logger subsystem is already set to '{existing}'; cannot change to '{attempted}'. All loggers must use the same subsystem."
    )]
    SubsystemConflict { existing: String, attempted: String },

    /// Reserved for configuration validation.  No current operation returns it.
    #[error("invalid logger configuration: {0}")]
    Configuration(String),
}
