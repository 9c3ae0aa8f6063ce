//! Quiz loop - workflow layer
//!
//! Drives one whole session over the console: prompt, read, grade, advance,
//! and apply the round-retry policy between rounds. Holds no resources
//! beyond the template and the hidden code; all state lives in the session.

use anyhow::Result;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{MessageTemplate, QuizSession, RoundOutcome, Verdict};
use crate::services::grading;
use crate::services::QuizContent;
use crate::utils::logging::truncate_text;

/// How a quiz session ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizOutcome {
    /// Cumulative accuracy reached the threshold
    Passed { accuracy: f64 },
    /// A round produced zero misses below the threshold
    Cleared { accuracy: f64 },
    /// The hidden exit code was typed
    HiddenExit,
    /// Stdin closed before the session finished
    InputClosed,
}

/// Console quiz flow
pub struct QuizFlow {
    template: MessageTemplate,
    hidden_code: Option<String>,
    accuracy_threshold: f64,
}

impl QuizFlow {
    pub fn new(config: &Config, content: &QuizContent) -> Self {
        Self {
            template: content.template.clone(),
            // pre-normalized so every prompt comparison is one string compare
            hidden_code: content
                .hidden_code
                .as_deref()
                .map(grading::normalize_keep_case),
            accuracy_threshold: config.accuracy_threshold,
        }
    }

    /// Run the session to completion over stdin/stdout
    pub async fn run(&self, session: &mut QuizSession) -> Result<QuizOutcome> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            self.show_prompt(session);

            let Some(line) = lines.next_line().await? else {
                info!("stdin closed, aborting the session");
                return Ok(QuizOutcome::InputClosed);
            };

            if self.is_hidden_exit(&line) {
                info!("hidden exit code entered, ending the program");
                println!("\nHidden code accepted. Bye!");
                return Ok(QuizOutcome::HiddenExit);
            }

            let verdict = self.grade(&line, session.current());
            match verdict {
                Verdict::Correct => println!("\n\u{2705} Correct!"),
                // typing practice: no hint of the expected answer
                Verdict::Wrong => println!("\n\u{274C} Wrong!"),
            }
            session.record(verdict);

            if !session.round_complete() {
                continue;
            }

            match session.finish_round(self.accuracy_threshold) {
                RoundOutcome::Passed { accuracy } => {
                    info!(
                        "session passed: attempts={}, correct={}, accuracy={:.3}",
                        session.total_attempts(),
                        session.correct_count(),
                        accuracy
                    );
                    println!(
                        "\n\u{1F389} Done! Cumulative accuracy: {:.1}%",
                        accuracy * 100.0
                    );
                    return Ok(QuizOutcome::Passed { accuracy });
                }
                RoundOutcome::Cleared { accuracy } => {
                    info!("round had zero misses, ending at accuracy={:.3}", accuracy);
                    println!(
                        "\nNothing left to retry. Cumulative accuracy: {:.1}%",
                        accuracy * 100.0
                    );
                    return Ok(QuizOutcome::Cleared { accuracy });
                }
                RoundOutcome::Retry { round, accuracy } => {
                    info!("retrying missed items: round={}, accuracy={:.3}", round, accuracy);
                    println!(
                        "\nCumulative accuracy: {:.1}% - retrying the missed ones (round {})",
                        accuracy * 100.0,
                        round
                    );
                }
            }
        }
    }

    /// Grade one answer, logging both raw and normalized forms
    fn grade(&self, input: &str, expected: &str) -> Verdict {
        debug!("input raw: '{}' ({} chars)", input, input.chars().count());
        debug!("input normalized: '{}'", grading::normalize(input));
        debug!("expected: '{}'", truncate_text(expected, 80));
        debug!("expected normalized: '{}'", grading::normalize(expected));

        if grading::answers_match(input, expected) {
            Verdict::Correct
        } else {
            Verdict::Wrong
        }
    }

    /// Hidden code matching keeps case but forgives spacing
    fn is_hidden_exit(&self, input: &str) -> bool {
        match &self.hidden_code {
            Some(code) => !code.is_empty() && grading::normalize_keep_case(input) == *code,
            None => false,
        }
    }

    fn show_prompt(&self, session: &QuizSession) {
        let (current_num, total_num) = session.position();
        println!(
            "\n{}",
            self.template
                .render(current_num, total_num, session.current())
        );
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_with_code(code: Option<&str>) -> QuizFlow {
        let content = QuizContent {
            words: vec!["x".to_string()],
            template: MessageTemplate::default(),
            hidden_code: code.map(|s| s.to_string()),
        };
        QuizFlow::new(&Config::default(), &content)
    }

    #[test]
    fn hidden_exit_keeps_case_but_forgives_spacing() {
        let flow = flow_with_code(Some("Open Sesame"));
        assert!(flow.is_hidden_exit("OpenSesame"));
        assert!(flow.is_hidden_exit("  Open  Sesame "));
        assert!(!flow.is_hidden_exit("opensesame"));
        assert!(!flow.is_hidden_exit("something else"));
    }

    #[test]
    fn no_hidden_code_never_exits() {
        let flow = flow_with_code(None);
        assert!(!flow.is_hidden_exit(""));
        assert!(!flow.is_hidden_exit("anything"));
    }

    #[test]
    fn grading_goes_through_the_normalizer() {
        let flow = flow_with_code(None);
        assert_eq!(flow.grade(" A  Stitch ", "a stitch"), Verdict::Correct);
        assert_eq!(flow.grade("a-stitch", "a\u{2013}stitch"), Verdict::Correct);
        assert_eq!(flow.grade("other", "a stitch"), Verdict::Wrong);
    }
}
