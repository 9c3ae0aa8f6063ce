use crate::config::Config;
use crate::models::QuizSession;
use crate::services::{process_guard, MailReporter, ProcessMonitor, QuizSource};
use crate::workflow::{QuizFlow, QuizOutcome};
use anyhow::Result;
use chrono::{Local, Timelike};
use tracing::{error, info};

/// Application main structure
pub struct App {
    config: Config,
    monitor: ProcessMonitor,
}

impl App {
    /// Build the application from its configuration
    pub fn new(config: Config) -> Self {
        let monitor = ProcessMonitor::new(&config);
        Self { config, monitor }
    }

    /// Run the whole program: lockdown, fetch, quiz, report
    pub async fn run(&self) -> Result<()> {
        log_startup(&self.config);

        if !within_allowed_hours(Local::now().hour(), self.config.earliest_hour) {
            info!(
                "blocked by the time restriction (before {:02}:00)",
                self.config.earliest_hour
            );
            println!(
                "\nThe early bird catches the worm!\nCome back after {:02}:00.",
                self.config.earliest_hour
            );
            return Ok(());
        }

        // clear anything disallowed before the first prompt appears
        let killed = process_guard::sweep(self.config.debug_mode);
        info!("startup sweep terminated {} process(es)", killed);
        self.monitor.start();

        let content = match QuizSource::new(&self.config).fetch().await {
            Ok(content) => content,
            Err(e) => {
                // fetch/auth failures abort the program after a visible message
                error!("quiz fetch failed: {}", e);
                eprintln!("\nCannot start the quiz: {}", e);
                self.monitor.stop();
                return Err(e.into());
            }
        };

        let mut session = QuizSession::new(content.words.clone());
        let flow = QuizFlow::new(&self.config, &content);

        let outcome = match flow.run(&mut session).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.monitor.stop();
                return Err(e);
            }
        };

        if matches!(
            outcome,
            QuizOutcome::Passed { .. } | QuizOutcome::Cleared { .. }
        ) {
            let reporter = MailReporter::new(&self.config);
            if let Err(e) = reporter
                .send_missed_report(session.all_wrong(), session.elapsed())
                .await
            {
                // a lost report never blocks shutdown
                error!("report mail failed, ignoring: {}", e);
            }
        }

        self.monitor.stop();
        log_final_stats(&session, outcome);

        Ok(())
    }
}

/// The quiz refuses to run before the configured hour
fn within_allowed_hours(hour: u32, earliest_hour: u32) -> bool {
    hour >= earliest_hour
}

// ========== log helpers ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "tajazzang starting - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "debug_mode={}, accuracy_threshold={}",
        config.debug_mode, config.accuracy_threshold
    );
    info!("{}", "=".repeat(60));
}

fn log_final_stats(session: &QuizSession, outcome: QuizOutcome) {
    info!("{}", "=".repeat(60));
    info!(
        "session over: outcome={:?}, rounds={}, attempts={}, correct={}, accuracy={:.3}",
        outcome,
        session.round(),
        session.total_attempts(),
        session.correct_count(),
        session.accuracy()
    );
    info!("{}", "=".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_before_the_gate_are_rejected() {
        for hour in 0..8 {
            assert!(!within_allowed_hours(hour, 8), "hour {} should block", hour);
        }
        for hour in 8..24 {
            assert!(within_allowed_hours(hour, 8), "hour {} should pass", hour);
        }
    }

    #[test]
    fn gate_at_midnight_allows_every_hour() {
        assert!(within_allowed_hours(0, 0));
        assert!(within_allowed_hours(23, 0));
    }
}
