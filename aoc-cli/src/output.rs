//! Output formatting for command results

use aoc_utils::{PuzzleDate, SubmissionFeedback, SubmissionResult};
use std::time::Duration;

/// Output formatter for command results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a resolved puzzle date
    pub fn print_date(&self, date: PuzzleDate) {
        if self.quiet {
            println!("{} {}", date.year(), date.day());
        } else {
            println!("year {} day {} ({})", date.year(), date.day(), date);
        }
    }

    /// Print a puzzle input unchanged
    pub fn print_input(&self, input: &str) {
        print!("{}", input);
    }

    /// Print the feedback of a submission
    pub fn print_feedback(&self, date: PuzzleDate, level: u8, feedback: &SubmissionFeedback) {
        if self.quiet {
            println!("{}", format_outcome(&feedback.outcome));
        } else {
            println!(
                "{} Level {}: {}\n{}",
                date,
                level,
                format_outcome(&feedback.outcome),
                feedback.message
            );
        }
    }
}

/// Format a wait time for display
fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format a submission outcome for display
fn format_outcome(outcome: &SubmissionResult) -> String {
    match outcome {
        SubmissionResult::Correct => "✓ Correct".to_string(),
        SubmissionResult::Incorrect => "✗ Incorrect".to_string(),
        SubmissionResult::AlreadyCompleted => "⏭ Already completed".to_string(),
        SubmissionResult::Throttled { wait_time } => match wait_time {
            Some(d) => format!("⏳ Throttled (wait {})", format_duration(*d)),
            None => "⏳ Throttled".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(41)), "41s");
        assert_eq!(format_duration(Duration::from_secs(305)), "5m 5s");
    }

    #[test]
    fn test_format_outcome() {
        assert_eq!(format_outcome(&SubmissionResult::Correct), "✓ Correct");
        assert_eq!(
            format_outcome(&SubmissionResult::Throttled {
                wait_time: Some(Duration::from_secs(90))
            }),
            "⏳ Throttled (wait 1m 30s)"
        );
        assert_eq!(
            format_outcome(&SubmissionResult::Throttled { wait_time: None }),
            "⏳ Throttled"
        );
    }
}
