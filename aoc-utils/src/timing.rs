//! Phase timings of a solution run
//!
//! A run is cut by four instants:
//!
//! ```text
//! // read puzzle input
//! let start = Instant::now();
//! // parse input data
//! let parse_end = Instant::now();
//! // solve part one
//! let between_parts = Instant::now();
//! // solve part two
//! let end = Instant::now();
//! // send answers
//! log_durations(start, parse_end, between_parts, end);
//! ```
//!
//! Reading the input happens before `start`; submitting after `end`.

use std::time::{Duration, Instant};
use tracing::info;

/// Durations between the four instants of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseTimings {
    pub parsing: Duration,
    pub part_one: Duration,
    pub part_two: Duration,
    pub total: Duration,
}

impl PhaseTimings {
    /// Compute the durations; instants out of order count as zero
    pub fn between(start: Instant, parse_end: Instant, between_parts: Instant, end: Instant) -> Self {
        Self {
            parsing: parse_end.saturating_duration_since(start),
            part_one: between_parts.saturating_duration_since(parse_end),
            part_two: end.saturating_duration_since(between_parts),
            total: end.saturating_duration_since(start),
        }
    }

    /// Log each phase in milliseconds
    pub fn log(&self) {
        info!("parsing: {}ms", self.parsing.as_millis());
        info!("part 1: {}ms", self.part_one.as_millis());
        info!("part 2: {}ms", self.part_two.as_millis());
        info!("total: {}ms", self.total.as_millis());
    }
}

/// Log how long parsing, both parts and the whole run took
pub fn log_durations(
    start: Instant,
    parse_end: Instant,
    between_parts: Instant,
    end: Instant,
) -> PhaseTimings {
    let timings = PhaseTimings::between(start, parse_end, between_parts, end);
    timings.log();
    timings
}

/// Records the instants of a run as it passes through its phases
///
/// A phase that is never marked takes no time.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    start: Instant,
    parse_end: Option<Instant>,
    between_parts: Option<Instant>,
}

impl PhaseTimer {
    /// Start timing now
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(start: Instant) -> Self {
        Self {
            start,
            parse_end: None,
            between_parts: None,
        }
    }

    /// Mark the end of parsing
    pub fn parsed(&mut self) {
        self.parsed_at(Instant::now());
    }

    pub fn parsed_at(&mut self, instant: Instant) {
        self.parse_end = Some(instant);
    }

    /// Mark the end of part one
    pub fn part_one_done(&mut self) {
        self.part_one_done_at(Instant::now());
    }

    pub fn part_one_done_at(&mut self, instant: Instant) {
        self.between_parts = Some(instant);
    }

    /// Stop now and log the timings
    pub fn finish(self) -> PhaseTimings {
        self.finish_at(Instant::now())
    }

    pub fn finish_at(self, end: Instant) -> PhaseTimings {
        let parse_end = self.parse_end.unwrap_or(self.start);
        let between_parts = self.between_parts.unwrap_or(parse_end);
        log_durations(self.start, parse_end, between_parts, end)
    }
}
