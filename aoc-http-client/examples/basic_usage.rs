//! Basic usage example for the AOC HTTP client
//!
//! Fetches the input of a day and optionally submits an answer for it.
//!
//! ```text
//! AOC_SESSION=... cargo run -p aoc-http-client --example basic_usage -- 2022 1 [level answer]
//! ```
//!
//! The session cookie can be copied from your browser after logging in to adventofcode.com

use aoc_http_client::{AocClient, SubmissionResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION").map_err(|_| "AOC_SESSION is not set")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (year, day) = match args.as_slice() {
        [year, day, ..] => (year.parse::<u16>()?, day.parse::<u8>()?),
        _ => return Err("usage: basic_usage <year> <day> [level answer]".into()),
    };

    let client = AocClient::new()?;

    let input = client.get_input(year, day, &session)?;
    println!("Fetched {} bytes ({} lines)", input.len(), input.lines().count());

    if let [_, _, level, answer] = args.as_slice() {
        let feedback = client.submit_answer(year, day, level.parse()?, answer, &session)?;
        println!("{}", feedback.message);
        match feedback.outcome {
            SubmissionResult::Correct => println!("✓ Correct"),
            SubmissionResult::Incorrect => println!("✗ Incorrect"),
            SubmissionResult::AlreadyCompleted => println!("⏭ Already completed"),
            SubmissionResult::Throttled { wait_time } => match wait_time {
                Some(wait) => println!("⏳ Throttled, wait {:?}", wait),
                None => println!("⏳ Throttled"),
            },
        }
    }

    Ok(())
}
