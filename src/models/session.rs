//! Quiz session state and the round-retry policy.
//!
//! A session walks the word list once per round. Misses are collected and
//! replayed as the next round's word list until the cumulative accuracy
//! reaches the threshold or a round ends with no misses.

use std::time::{Duration, Instant};

/// Result of grading a single answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Decision taken when a round has been fully attempted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    /// Cumulative accuracy reached the threshold; the session is over
    Passed { accuracy: f64 },
    /// The round produced zero misses but the threshold was not reached;
    /// there is nothing left to replay, the session is over
    Cleared { accuracy: f64 },
    /// Missed items were carried into a new round
    Retry { round: u32, accuracy: f64 },
}

/// Quiz session state
///
/// The cumulative accuracy denominator is pinned to the size of the
/// first-round word list; retry rounds shrink the list but never the
/// denominator.
pub struct QuizSession {
    words: Vec<String>,
    index: usize,
    round: u32,
    initial_count: usize,
    total_attempts: usize,
    correct_count: usize,
    round_attempts: usize,
    round_correct: usize,
    wrong_this_round: Vec<String>,
    all_wrong: Vec<String>,
    started_at: Instant,
}

impl QuizSession {
    pub fn new(words: Vec<String>) -> Self {
        let initial_count = words.len();
        Self {
            words,
            index: 0,
            round: 1,
            initial_count,
            total_attempts: 0,
            correct_count: 0,
            round_attempts: 0,
            round_correct: 0,
            wrong_this_round: Vec::new(),
            all_wrong: Vec::new(),
            started_at: Instant::now(),
        }
    }

    /// The proverb currently being asked
    pub fn current(&self) -> &str {
        &self.words[self.index]
    }

    /// 1-based position within the current round and the round's item count
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.words.len())
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Cumulative accuracy against the initial word-list size
    pub fn accuracy(&self) -> f64 {
        if self.initial_count == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.initial_count as f64
        }
    }

    /// Every miss across all rounds, in the order it happened (may repeat)
    pub fn all_wrong(&self) -> &[String] {
        &self.all_wrong
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Record the verdict for the current item and advance
    pub fn record(&mut self, verdict: Verdict) {
        self.round_attempts += 1;
        self.total_attempts += 1;
        match verdict {
            Verdict::Correct => {
                self.round_correct += 1;
                self.correct_count += 1;
            }
            Verdict::Wrong => {
                let missed = self.words[self.index].clone();
                self.wrong_this_round.push(missed.clone());
                self.all_wrong.push(missed);
            }
        }
        self.index += 1;
    }

    /// True once every item in the current list has been attempted
    pub fn round_complete(&self) -> bool {
        self.index >= self.words.len()
    }

    /// Apply the round-retry policy at the end of a round
    ///
    /// Must only be called when `round_complete()` is true. On `Retry` the
    /// session is reset onto the missed subset.
    pub fn finish_round(&mut self, threshold: f64) -> RoundOutcome {
        debug_assert!(self.round_complete());
        let accuracy = self.accuracy();

        if accuracy >= threshold {
            return RoundOutcome::Passed { accuracy };
        }
        if self.wrong_this_round.is_empty() {
            return RoundOutcome::Cleared { accuracy };
        }

        self.words = std::mem::take(&mut self.wrong_this_round);
        self.index = 0;
        self.round += 1;
        self.round_attempts = 0;
        self.round_correct = 0;
        RoundOutcome::Retry {
            round: self.round,
            accuracy,
        }
    }
}
