//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Helper library error
    #[error("{0}")]
    Utils(#[from] aoc_utils::UtilsError),

    /// Puzzle date or level error
    #[error("{0}")]
    Date(#[from] aoc_utils::DateError),
}
