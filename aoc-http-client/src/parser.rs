//! HTML response parsing utilities

use crate::{SubmissionResult, error::AocError};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;

/// Parser for AOC answer pages with lazily compiled regex patterns and selectors
///
/// The caches use `OnceLock` so a client holding a parser can live in
/// process-wide state.
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    throttle_regex: OnceLock<Regex>,
    paragraph_selector: OnceLock<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceLock::new(),
            paragraph_selector: OnceLock::new(),
        }
    }

    /// Get or compile the throttle duration regex
    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    /// Get or compile the paragraph selector
    fn paragraph_selector(&self) -> &Selector {
        self.paragraph_selector
            .get_or_init(|| Selector::parse("p").unwrap())
    }

    /// Extract the text of the first `<p>` element of an HTML document
    ///
    /// The answer page puts the whole verdict into its first paragraph.
    pub fn extract_feedback(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);

        let paragraph = document
            .select(self.paragraph_selector())
            .next()
            .ok_or(AocError::HtmlParse)?;

        Ok(paragraph.text().collect::<String>().trim().to_string())
    }

    /// Extract throttle duration from feedback text
    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        let duration_str = captures.get(1)?.as_str();
        humantime::parse_duration(duration_str).ok()
    }

    /// Classify feedback text
    pub fn classify(&self, text: &str) -> SubmissionResult {
        if text.contains("not the right answer") {
            return SubmissionResult::Incorrect;
        }

        if text.contains("already complete it") {
            return SubmissionResult::AlreadyCompleted;
        }

        if text.contains("gave an answer too recently") {
            let wait_time = self.extract_throttle_duration(text);
            return SubmissionResult::Throttled { wait_time };
        }

        SubmissionResult::Correct
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn answer_page(paragraphs: &[&str]) -> String {
        let body: String = paragraphs.iter().map(|p| format!("<p>{}</p>", p)).collect();
        format!(
            r#"<html><body><main><article>{}</article></main></body></html>"#,
            body
        )
    }

    #[test]
    fn test_first_paragraph_wins() {
        let parser = ResponseParser::new();
        let html = answer_page(&["That's the right answer!", "You have completed Day 1!"]);
        assert_eq!(
            parser.extract_feedback(&html).unwrap(),
            "That's the right answer!"
        );
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        let parser = ResponseParser::new();
        let html = answer_page(&[
            r#"That's not the right answer. <a href="/2022/day/1">[Return to Day 1]</a>"#,
        ]);
        let text = parser.extract_feedback(&html).unwrap();
        assert_eq!(text, "That's not the right answer. [Return to Day 1]");
        assert_eq!(parser.classify(&text), SubmissionResult::Incorrect);
    }

    #[test]
    fn test_missing_paragraph() {
        let parser = ResponseParser::new();
        let html = r#"<html><body><main>No paragraphs here</main></body></html>"#;
        assert!(matches!(
            parser.extract_feedback(html),
            Err(AocError::HtmlParse)
        ));
    }

    #[test]
    fn test_malformed_html() {
        let parser = ResponseParser::new();
        // scraper is lenient and still finds the unclosed paragraph
        let html = r#"<html><body><main><p>Unclosed tag"#;
        assert_eq!(parser.extract_feedback(html).unwrap(), "Unclosed tag");
    }

    #[test]
    fn test_throttled_without_duration() {
        let parser = ResponseParser::new();
        let result = parser.classify("You gave an answer too recently.");
        assert_eq!(result, SubmissionResult::Throttled { wait_time: None });
    }

    #[test]
    fn test_invalid_duration_string() {
        let parser = ResponseParser::new();
        let result = parser
            .classify("You gave an answer too recently. You have invalid duration left to wait.");
        assert_eq!(result, SubmissionResult::Throttled { wait_time: None });
    }

    #[test]
    fn test_already_completed() {
        let parser = ResponseParser::new();
        let html = answer_page(&[
            "You don't seem to be solving the right level.  Did you already complete it?",
        ]);
        let text = parser.extract_feedback(&html).unwrap();
        assert_eq!(parser.classify(&text), SubmissionResult::AlreadyCompleted);
    }

    #[test]
    fn test_empty_text_defaults_to_correct() {
        let parser = ResponseParser::new();
        assert_eq!(parser.classify(""), SubmissionResult::Correct);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_first_paragraph_extraction(
            first in "[a-zA-Z0-9 .,!?]{1,100}",
            second in "[a-zA-Z0-9 .,!?]{1,100}",
        ) {
            let html = answer_page(&[&first, &second]);
            let parser = ResponseParser::new();
            let extracted = parser.extract_feedback(&html).unwrap();

            prop_assert_eq!(extracted, first.trim().to_string());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_incorrect_answer_detection(
            prefix in "[a-zA-Z0-9 .,!?]{0,100}",
            suffix in "[a-zA-Z0-9 .,!?]{0,100}",
            pattern_variant in prop::sample::select(vec![
                "not the right answer",
                "That's not the right answer",
                "not the right answer.",
                "not the right answer!",
            ]),
        ) {
            let text = format!("{} {} {}", prefix, pattern_variant, suffix);
            let parser = ResponseParser::new();
            prop_assert_eq!(parser.classify(&text), SubmissionResult::Incorrect);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_throttle_duration_extraction(
            minutes in 0u64..60u64,
            seconds in 0u64..60u64,
            prefix in "[a-zA-Z0-9 ,!?]{0,50}",
        ) {
            prop_assume!(minutes > 0 || seconds > 0);

            let duration_str = if minutes > 0 && seconds > 0 {
                format!("{}m {}s", minutes, seconds)
            } else if minutes > 0 {
                format!("{}m", minutes)
            } else {
                format!("{}s", seconds)
            };

            let text = format!(
                "{} You gave an answer too recently. You have {} left to wait.",
                prefix, duration_str
            );

            let parser = ResponseParser::new();
            match parser.classify(&text) {
                SubmissionResult::Throttled { wait_time } => {
                    prop_assert_eq!(
                        wait_time.map(|d| d.as_secs()),
                        Some(minutes * 60 + seconds),
                        "Duration string: '{}'",
                        duration_str
                    );
                }
                other => prop_assert!(false, "Expected Throttled result, got {:?}", other),
            }
        }
    }
}
