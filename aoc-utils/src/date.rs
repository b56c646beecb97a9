//! Puzzle identity: which year/day a piece of code solves, and which level
//!
//! Solutions are laid out one module per day, e.g.
//! `my_solutions::year2022::day06` or `my_solutions::year_2025::day_1`.
//! The day comes from the nearest `day…` segment, so a nested
//! `year2022::day06::tests` module still resolves to day 6. Without such a
//! segment the numeric suffix of the last segment is used. The year comes
//! from the nearest `year…` segment before the day.

use crate::error::DateError;
use std::fmt;

/// First Advent of Code event
pub const FIRST_YEAR: u16 = 2015;

/// Number of puzzle days per event
pub const LAST_DAY: u8 = 25;

/// The (year, day) pair identifying a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleDate {
    year: u16,
    day: u8,
}

impl PuzzleDate {
    /// Create a validated puzzle date
    pub fn new(year: u16, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: check_year(year.into())?,
            day: check_day(day.into())?,
        })
    }

    /// Resolve the puzzle date from a module path
    ///
    /// Segments may be separated by `::` or `.`. `default_year` is used when
    /// no segment names the year.
    ///
    /// ```
    /// use aoc_utils::PuzzleDate;
    ///
    /// let date = PuzzleDate::from_namespace("solutions::year2022::day06", None).unwrap();
    /// assert_eq!((date.year(), date.day()), (2022, 6));
    ///
    /// let date = PuzzleDate::from_namespace("solutions::day_1", Some(2025)).unwrap();
    /// assert_eq!((date.year(), date.day()), (2025, 1));
    /// ```
    pub fn from_namespace(namespace: &str, default_year: Option<u16>) -> Result<Self, DateError> {
        let segments: Vec<&str> = namespace
            .split("::")
            .flat_map(|segment| segment.split('.'))
            .filter(|segment| !segment.is_empty())
            .collect();

        let Some(day_index) = segments
            .iter()
            .rposition(|segment| prefixed_digits(segment, "day").is_some())
            .or_else(|| segments.len().checked_sub(1))
        else {
            return Err(DateError::MissingDay(namespace.to_string()));
        };
        let (parents, day_segment) = (&segments[..day_index], segments[day_index]);

        let day_digits = prefixed_digits(day_segment, "day")
            .or_else(|| numeric_suffix(day_segment))
            .ok_or_else(|| DateError::MissingDay(namespace.to_string()))?;
        let day = parse_digits(day_digits)?;

        let year = match parents
            .iter()
            .rev()
            .find_map(|segment| prefixed_digits(segment, "year"))
        {
            Some(digits) => parse_digits(digits)?,
            None => default_year
                .map(u64::from)
                .ok_or_else(|| DateError::MissingYear(namespace.to_string()))?,
        };

        Ok(Self {
            year: check_year(year)?,
            day: check_day(day)?,
        })
    }

    /// Event year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Day of the event, 1 to 25
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

fn check_year(year: u64) -> Result<u16, DateError> {
    u16::try_from(year)
        .ok()
        .filter(|year| *year >= FIRST_YEAR)
        .ok_or(DateError::YearOutOfRange(year))
}

fn check_day(day: u64) -> Result<u8, DateError> {
    u8::try_from(day)
        .ok()
        .filter(|day| (1..=LAST_DAY).contains(day))
        .ok_or(DateError::DayOutOfRange(day))
}

/// Trailing ASCII digits of a segment, if any
fn numeric_suffix(segment: &str) -> Option<&str> {
    let prefix_len = segment.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &segment[prefix_len..];
    (!digits.is_empty()).then_some(digits)
}

fn parse_digits(digits: &str) -> Result<u64, DateError> {
    digits
        .parse()
        .map_err(|_| DateError::NumberTooLarge(digits.to_string()))
}

/// Digits of a segment such as `year2022`, `year_2022` or `day_6`
fn prefixed_digits<'a>(segment: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = segment.strip_prefix(prefix)?;
    let digits = rest.strip_prefix('_').unwrap_or(rest);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// Puzzle level: the first or the second part of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    One,
    Two,
}

impl Level {
    /// Level from its number as used in the `level` form field
    pub fn new(level: u8) -> Result<Self, DateError> {
        match level {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            other => Err(DateError::InvalidLevel(other)),
        }
    }

    /// Number sent in the `level` form field
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }

    /// Suffix of the part-specific input file
    pub fn file_suffix(self) -> char {
        match self {
            Level::One => 'a',
            Level::Two => 'b',
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = DateError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Level::new(level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
