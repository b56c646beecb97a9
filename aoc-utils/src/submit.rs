//! Answer submission

use crate::context::AocContext;
use crate::date::{Level, PuzzleDate};
use crate::error::UtilsError;
use aoc_http_client::SubmissionFeedback;
use std::fmt::Display;
use tracing::{info, warn};

impl AocContext {
    /// Send an answer and log the server's feedback
    ///
    /// The request body is `level={level}&answer={answer}`.
    pub fn send_puzzle_answer(
        &self,
        date: PuzzleDate,
        level: Level,
        answer: impl Display,
    ) -> Result<SubmissionFeedback, UtilsError> {
        let answer = answer.to_string();
        info!("sending {}…", answer);

        let session = self.settings.session()?;
        let feedback = self
            .client
            .submit_answer(date.year(), date.day(), level.number(), &answer, session)
            .inspect_err(|e| warn!(%date, %level, error = %e, "cannot submit answer"))?;

        info!(%date, %level, outcome = ?feedback.outcome, "{}", feedback.message);
        Ok(feedback)
    }
}
