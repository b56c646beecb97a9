//! Error types for the helper library

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving a puzzle date or level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// No namespace segment carries a day number
    #[error("namespace `{0}` does not name a day")]
    MissingDay(String),
    /// The day suffix is not a puzzle day
    #[error("day {0} is outside 1..=25")]
    DayOutOfRange(u64),
    /// Neither the namespace nor the configuration names a year
    #[error("namespace `{0}` has no year segment and no default year is configured")]
    MissingYear(String),
    /// The year is before the first event
    #[error("year {0} is not an Advent of Code year")]
    YearOutOfRange(u64),
    /// A day or year number that does not fit any integer type
    #[error("number {0} is too large for a day or year")]
    NumberTooLarge(String),
    /// Puzzles only have two levels
    #[error("level {0} is not 1 or 2")]
    InvalidLevel(u8),
}

/// Main error type of the helper library
#[derive(Debug, Error)]
pub enum UtilsError {
    /// Puzzle date or level could not be resolved
    #[error("Cannot resolve puzzle: {0}")]
    Date(#[from] DateError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// A remote operation was attempted without a session token
    #[error("No session token configured (set `aoc.session` or AOC_SESSION)")]
    MissingSession,

    /// Part-specific inputs only exist locally
    #[error("Part input file {} does not exist", .path.display())]
    MissingPartInput { path: PathBuf },

    /// IO error on a specific file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Property with an unusable value
    #[error("Invalid value `{value}` for property `{key}`")]
    InvalidProperty { key: String, value: String },
}
