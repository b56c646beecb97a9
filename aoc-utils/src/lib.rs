//! Advent of Code solution helpers
//!
//! Small conveniences for a solution module:
//! - work out which puzzle it solves from its module path,
//! - read the puzzle input from a local resource file or the server,
//! - submit an answer and log the server's feedback,
//! - log how long parsing and both parts took.
//!
//! # Layout
//!
//! A solution for day 6 of 2022 lives in a module whose path contains
//! `year2022::day06` (or `year_2022::day_6`); nested modules such as its
//! `tests` resolve to the same day. Inputs are read from the calling crate's
//! `resources/` directory. When the caller is compiled for tests,
//! `tests/resources/` is searched first:
//!
//! ```text
//! resources/
//!   security.properties     # aoc.session=<cookie>
//!   year2022/
//!     day06                 # shared input
//!     day07a                # level 1 only input
//!     day07b                # level 2 only input
//! ```
//!
//! # Example
//!
//! ```no_run
//! mod year2022 {
//!     pub mod day06 {
//!         use aoc_utils::{PhaseTimer, read_puzzle_input, send_puzzle_answer};
//!
//!         pub fn run() -> Result<(), aoc_utils::UtilsError> {
//!             let input = read_puzzle_input!()?;
//!             let mut timer = PhaseTimer::start();
//!             let chars: Vec<char> = input.trim().chars().collect();
//!             timer.parsed();
//!             let one = chars.len();
//!             timer.part_one_done();
//!             let two = chars.len() * 2;
//!             timer.finish();
//!             send_puzzle_answer!(1, one)?;
//!             send_puzzle_answer!(2, two)?;
//!             Ok(())
//!         }
//!     }
//! }
//! ```

mod context;
mod date;
mod error;
mod input;
mod settings;
mod submit;
mod timing;

pub use aoc_http_client::{AocClient, AocError, SubmissionFeedback, SubmissionResult};
pub use context::{AocContext, resource_roots};
pub use date::{FIRST_YEAR, LAST_DAY, Level, PuzzleDate};
pub use error::{DateError, UtilsError};
pub use input::ResourceStore;
pub use settings::{PROPERTIES_FILE, Properties, SESSION_ENV, Settings};
pub use timing::{PhaseTimer, PhaseTimings, log_durations};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr log subscriber honouring `RUST_LOG` (default `info`)
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();
}

/// Context and puzzle date of a calling module
#[doc(hidden)]
pub fn __caller(
    crate_dir: &str,
    test_build: bool,
    namespace: &str,
) -> Result<(&'static AocContext, PuzzleDate), UtilsError> {
    let context = AocContext::global(crate_dir, test_build)?;
    let date = context.resolve_date(namespace)?;
    Ok((context, date))
}

#[doc(hidden)]
#[macro_export]
macro_rules! __caller {
    () => {
        $crate::__caller(env!("CARGO_MANIFEST_DIR"), cfg!(test), module_path!())
    };
}

/// Puzzle date of the invoking module
///
/// Evaluates to `Result<PuzzleDate, UtilsError>`.
#[macro_export]
macro_rules! puzzle_date {
    () => {
        $crate::__caller!().map(|(_, date)| date)
    };
}

/// Read the input of the invoking module's puzzle
///
/// Without arguments the shared input is read, from the local resource file
/// if present and from the server otherwise. With a level (`1` or `2`) the
/// `a`/`b` resource file of that level is read.
///
/// Evaluates to `Result<String, UtilsError>`.
#[macro_export]
macro_rules! read_puzzle_input {
    () => {
        $crate::__caller!().and_then(|(context, date)| context.read_puzzle_input(date))
    };
    ($level:expr) => {
        $crate::__caller!().and_then(|(context, date)| {
            $crate::Level::new($level)
                .map_err($crate::UtilsError::from)
                .and_then(|level| context.read_part_input(date, level))
        })
    };
}

/// Submit an answer for the invoking module's puzzle
///
/// Evaluates to `Result<SubmissionFeedback, UtilsError>`.
#[macro_export]
macro_rules! send_puzzle_answer {
    ($level:expr, $answer:expr) => {
        $crate::__caller!().and_then(|(context, date)| {
            $crate::Level::new($level)
                .map_err($crate::UtilsError::from)
                .and_then(|level| context.send_puzzle_answer(date, level, $answer))
        })
    };
}
