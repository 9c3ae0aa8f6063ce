//! Weekly quiz retrieval - business capability layer
//!
//! Resolves today's worksheet from the ISO week number, pulls the proverb
//! list, and reads the message template plus the optional hidden exit code
//! from the info worksheet. A missing weekly worksheet is fatal; a broken
//! info worksheet only costs the custom message.

use crate::api::SheetsClient;
use crate::config::Config;
use crate::error::{AppError, AppResult, SheetError};
use crate::models::MessageTemplate;
use chrono::{Datelike, Local, NaiveDate};
use tracing::{info, warn};

/// Everything one quiz run needs from the spreadsheet
#[derive(Debug)]
pub struct QuizContent {
    pub words: Vec<String>,
    pub template: MessageTemplate,
    pub hidden_code: Option<String>,
}

/// Weekly quiz retrieval service
pub struct QuizSource {
    client: SheetsClient,
    sheet_prefix: String,
    info_sheet: String,
    quiz_header: String,
}

impl QuizSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: SheetsClient::new(config),
            sheet_prefix: config.sheet_prefix.clone(),
            info_sheet: config.info_sheet.clone(),
            quiz_header: config.quiz_header.clone(),
        }
    }

    /// Fetch this week's word list, template and hidden code in one go
    pub async fn fetch(&self) -> AppResult<QuizContent> {
        let today = Local::now().date_naive();
        let sheet_name = weekly_sheet_name(&self.sheet_prefix, today);
        info!("fetching weekly worksheet '{}'", sheet_name);

        let rows = match self.client.values(&sheet_name).await {
            // the API answers 400 for a range that names a missing worksheet
            Err(AppError::Sheet(SheetError::BadResponse { status: 400, .. })) => {
                return Err(AppError::worksheet_not_found(
                    sheet_name,
                    today.format("%Y-%m-%d").to_string(),
                ));
            }
            other => other?,
        };

        let words = parse_quiz_rows(&rows, &self.quiz_header);
        if words.is_empty() {
            return Err(AppError::Sheet(SheetError::EmptyWordList {
                sheet: sheet_name,
            }));
        }
        info!("loaded {} proverbs from '{}'", words.len(), sheet_name);

        // the info worksheet is best-effort; any failure keeps the fallback
        let (template, hidden_code) = match self.client.values(&self.info_sheet).await {
            Ok(info_rows) => parse_info_rows(&info_rows),
            Err(e) => {
                warn!("reading info worksheet '{}' failed: {}", self.info_sheet, e);
                (MessageTemplate::default(), None)
            }
        };

        Ok(QuizContent {
            words,
            template,
            hidden_code,
        })
    }
}

/// Worksheet name for a given date, e.g. `Tajazzang_CW34`
pub fn weekly_sheet_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}{:02}", prefix, date.iso_week().week())
}

/// Extract proverbs from the weekly worksheet rows
///
/// First column only; blanks are dropped and a leading header row matching
/// `header` is skipped.
fn parse_quiz_rows(rows: &[Vec<String>], header: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.first())
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .filter(|cell| !cell.eq_ignore_ascii_case(header))
        .map(|cell| cell.to_string())
        .collect()
}

/// Read the key/value grid of the info worksheet
///
/// Recognized keys (case-insensitive): `message`, `hidden code`. A missing
/// message row falls back to the built-in template.
fn parse_info_rows(rows: &[Vec<String>]) -> (MessageTemplate, Option<String>) {
    let mut message = None;
    let mut hidden_code = None;

    for row in rows {
        if row.len() < 2 {
            continue;
        }
        let key = row[0].trim().to_lowercase();
        let value = row[1].trim();
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "message" => message = Some(value.to_string()),
            "hidden code" => hidden_code = Some(value.to_string()),
            _ => {}
        }
    }

    let template = match message {
        Some(head) => MessageTemplate::from_remote_head(&head),
        None => {
            warn!("info worksheet has no message row, using the fallback template");
            MessageTemplate::default()
        }
    };

    (template, hidden_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn sheet_name_uses_two_digit_iso_week() {
        // January 4th always falls in ISO week 1
        let early = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        assert_eq!(weekly_sheet_name("Tajazzang_CW", early), "Tajazzang_CW01");

        // December 28th always falls in the last ISO week of its year
        let late = NaiveDate::from_ymd_opt(2020, 12, 28).unwrap();
        assert_eq!(weekly_sheet_name("Tajazzang_CW", late), "Tajazzang_CW53");
    }

    #[test]
    fn quiz_rows_skip_header_and_blanks() {
        let rows = rows(&[
            &["proverb", "note"],
            &["a stitch in time saves nine"],
            &["   "],
            &[],
            &["  look before you leap  ", "extra"],
        ]);
        assert_eq!(
            parse_quiz_rows(&rows, "proverb"),
            vec!["a stitch in time saves nine", "look before you leap"]
        );
    }

    #[test]
    fn info_rows_yield_message_and_hidden_code() {
        let rows = rows(&[
            &["Message", "Have a great week!"],
            &["Hidden Code", "open-sesame"],
            &["short row"],
            &["other", "ignored"],
        ]);
        let (template, code) = parse_info_rows(&rows);
        assert_eq!(code.as_deref(), Some("open-sesame"));
        assert!(template.render(1, 1, "x").starts_with("Have a great week!"));
    }

    #[test]
    fn missing_message_falls_back_to_default_template() {
        let rows = rows(&[&["hidden code", "1234"]]);
        let (template, code) = parse_info_rows(&rows);
        assert_eq!(code.as_deref(), Some("1234"));
        assert_eq!(
            template.render(1, 2, "p"),
            MessageTemplate::default().render(1, 2, "p")
        );
    }
}
