//! AOC HTTP Client Library
//!
//! Blocking client for the two Advent of Code endpoints a solution needs:
//! downloading the personal puzzle input and submitting an answer.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Answer submission as a form-encoded `level`/`answer` body
//! - Feedback extraction from the first paragraph of the answer page
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, SubmissionResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2022, 1, session)?;
//!
//! let feedback = client.submit_answer(2022, 1, 1, "42", session)?;
//! println!("{}", feedback.message);
//! if let SubmissionResult::Throttled { wait_time } = feedback.outcome {
//!     println!("Throttled: {:?}", wait_time);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL, SubmissionFeedback, SubmissionResult};
pub use error::AocError;
