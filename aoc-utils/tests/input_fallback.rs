//! Local-then-remote input resolution and answer submission against a mock server

use aoc_utils::{AocContext, Level, Properties, PuzzleDate, Settings, SubmissionResult, UtilsError};
use mockito::Matcher;
use std::fs;
use tempfile::TempDir;

fn context(server: &mockito::Server, root: &TempDir, extra: &str) -> AocContext {
    let properties = Properties::parse(&format!(
        "aoc.session=test-session\naoc.base-url={}\n{}",
        server.url(),
        extra
    ));
    let settings = Settings::from_properties(&properties).unwrap();
    AocContext::new(settings, root.path().to_path_buf()).unwrap()
}

fn day(day: u8) -> PuzzleDate {
    PuzzleDate::new(2022, day).unwrap()
}

#[test]
fn test_local_file_is_preferred_over_remote() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2022/day/6/input")
        .with_status(200)
        .with_body("remote")
        .expect(0)
        .create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "");
    context.store().put(day(6), "local").unwrap();

    assert_eq!(context.read_puzzle_input(day(6)).unwrap(), "local");
    mock.assert();
}

#[test]
fn test_missing_file_falls_back_to_remote() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2022/day/6/input")
        .match_header("cookie", "session=test-session")
        .with_status(200)
        .with_body("remote")
        .expect(1)
        .create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "");

    assert_eq!(context.read_puzzle_input(day(6)).unwrap(), "remote");
    mock.assert();
    // not stored unless asked to
    assert!(context.store().get(day(6)).is_none());
}

#[test]
fn test_fetched_input_is_stored_when_enabled() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2022/day/6/input")
        .with_status(200)
        .with_body("remote")
        .expect(1)
        .create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "aoc.input.store=true\n");

    assert_eq!(context.read_puzzle_input(day(6)).unwrap(), "remote");
    assert_eq!(context.read_puzzle_input(day(6)).unwrap(), "remote");
    mock.assert();
    assert_eq!(
        fs::read_to_string(root.path().join("year2022").join("day06")).unwrap(),
        "remote"
    );
}

#[test]
fn test_remote_failure_is_returned_when_no_fallback_remains() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/2022/day/7/input").with_status(404).create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "");

    match context.read_puzzle_input(day(7)) {
        Err(UtilsError::Http(aoc_utils::AocError::InvalidStatus { status })) => {
            assert_eq!(status.as_u16(), 404)
        }
        other => panic!("Expected InvalidStatus, got {:?}", other),
    }
}

#[test]
fn test_remote_fetch_needs_a_session() {
    let server = mockito::Server::new();
    let root = TempDir::new().unwrap();
    let settings = Settings::from_properties(&Properties::parse(&format!(
        "aoc.base-url={}\n",
        server.url()
    )))
    .unwrap();
    let context = AocContext::new(settings, root.path().to_path_buf()).unwrap();

    assert!(matches!(
        context.read_puzzle_input(day(6)),
        Err(UtilsError::MissingSession)
    ));
}

#[test]
fn test_answer_is_sent_as_form_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/2022/day/1/answer")
        .match_header("cookie", "session=test-session")
        .match_body(Matcher::Exact("level=1&answer=42".to_string()))
        .with_status(200)
        .with_body(
            "<html><body><main><article><p>That's the right answer! You are one gold star closer.</p>\
             <p>You have completed Day 1!</p></article></main></body></html>",
        )
        .expect(1)
        .create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "");

    let feedback = context.send_puzzle_answer(day(1), Level::One, 42).unwrap();

    mock.assert();
    assert_eq!(
        feedback.message,
        "That's the right answer! You are one gold star closer."
    );
    assert_eq!(feedback.outcome, SubmissionResult::Correct);
}

#[test]
fn test_throttled_answer_reports_wait_time() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/2022/day/2/answer")
        .match_body(Matcher::Exact("level=2&answer=abc".to_string()))
        .with_status(200)
        .with_body(
            "<main><article><p>You gave an answer too recently; you have to wait after \
             submitting an answer before trying again.  You have 41s left to wait.</p></article></main>",
        )
        .create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "");

    let feedback = context.send_puzzle_answer(day(2), Level::Two, "abc").unwrap();
    assert_eq!(
        feedback.outcome,
        SubmissionResult::Throttled {
            wait_time: Some(std::time::Duration::from_secs(41))
        }
    );
}

#[test]
fn test_failed_submission_is_returned() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/2022/day/3/answer")
        .with_status(500)
        .expect(1)
        .create();

    let root = TempDir::new().unwrap();
    let context = context(&server, &root, "");

    match context.send_puzzle_answer(day(3), Level::One, 157) {
        Err(UtilsError::Http(aoc_utils::AocError::InvalidStatus { status })) => {
            assert_eq!(status.as_u16(), 500)
        }
        other => panic!("Expected InvalidStatus, got {:?}", other),
    }
    mock.assert();
}
