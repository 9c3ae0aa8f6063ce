//! Guardian report mail - business capability layer
//!
//! Sends the de-duplicated missed-item list with the total quiz time over
//! SMTP. The caller decides what a send failure means; here it is only
//! reported as an error.

use crate::config::Config;
use crate::error::{AppError, AppResult, MailError};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::collections::HashSet;
use std::time::Duration;
use tracing::info;

/// Guardian report mail service
pub struct MailReporter {
    smtp_host: String,
    sender: String,
    recipients: Vec<String>,
    password: String,
    subject: String,
}

impl MailReporter {
    pub fn new(config: &Config) -> Self {
        Self {
            smtp_host: config.smtp_host.clone(),
            sender: config.mail_sender.clone(),
            recipients: config.recipients(),
            password: config.mail_password.clone(),
            subject: config.mail_subject.clone(),
        }
    }

    /// Send the end-of-quiz report
    ///
    /// `missed` is the raw all-rounds miss accumulation; duplicates are
    /// removed here.
    pub async fn send_missed_report(&self, missed: &[String], elapsed: Duration) -> AppResult<()> {
        if self.recipients.is_empty() {
            return Err(AppError::Mail(MailError::NoRecipients));
        }

        let body = build_report_body(missed, elapsed);

        let mut builder = Message::builder()
            .from(parse_mailbox(&self.sender)?)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN);
        for recipient in &self.recipients {
            builder = builder.to(parse_mailbox(recipient)?);
        }
        let message = builder
            .body(body)
            .map_err(|e| AppError::Mail(MailError::BuildFailed {
                source: Box::new(e),
            }))?;

        info!("connecting to SMTP relay {}", self.smtp_host);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp_host)
            .map_err(|e| AppError::mail_send_failed(&self.smtp_host, e))?
            .credentials(Credentials::new(self.sender.clone(), self.password.clone()))
            .build();

        transport
            .send(message)
            .await
            .map_err(|e| AppError::mail_send_failed(&self.smtp_host, e))?;

        info!(
            "missed-item report sent to {} recipient(s)",
            self.recipients.len()
        );
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> AppResult<Mailbox> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| {
            AppError::Mail(MailError::InvalidAddress {
                address: address.to_string(),
                source: Box::new(e),
            })
        })
}

/// Plain-text report body
///
/// Misses are de-duplicated keeping first-seen order; the elapsed time is
/// shown as HH:MM:SS above the list.
pub fn build_report_body(missed: &[String], elapsed: Duration) -> String {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = missed
        .iter()
        .map(|s| s.as_str())
        .filter(|s| seen.insert(*s))
        .collect();

    format!(
        "Please keep the missed proverbs in the sheet so they come up again for practice.\n[total time: {}]\n\n{}",
        format_elapsed(elapsed),
        unique.join("\n")
    )
}

/// HH:MM:SS rendering of the quiz duration
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_renders_as_hms() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "00:00:59");
        assert_eq!(format_elapsed(Duration::from_secs(3600 + 2 * 60 + 3)), "01:02:03");
        assert_eq!(format_elapsed(Duration::from_secs(25 * 3600)), "25:00:00");
    }

    #[test]
    fn report_deduplicates_keeping_first_seen_order() {
        let missed = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        let body = build_report_body(&missed, Duration::from_secs(65));
        assert!(body.contains("[total time: 00:01:05]"));
        assert!(body.ends_with("b\na\nc"));
    }

    #[test]
    fn empty_miss_list_still_renders_the_header() {
        let body = build_report_body(&[], Duration::from_secs(10));
        assert!(body.contains("00:00:10"));
        assert!(body.ends_with("\n\n"));
    }
}
