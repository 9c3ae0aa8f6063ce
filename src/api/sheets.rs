//! Google Sheets API client
//!
//! Wraps the read-only `values` REST endpoint. Everything the app fetches
//! (weekly word list, info worksheet) comes through here.

use crate::config::Config;
use crate::error::{AppError, AppResult, SheetError};
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// `values.get` response payload
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Error payload returned by the Sheets API
#[derive(Debug, Deserialize, Default)]
struct ApiErrorBody {
    #[serde(default)]
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Default)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Google Sheets API client
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    /// Create a new client from the configured spreadsheet and API key
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: SHEETS_API_BASE.to_string(),
            spreadsheet_id: extract_spreadsheet_id(&config.spreadsheet),
            api_key: config.sheets_api_key.clone(),
        }
    }

    /// Fetch all rows of one worksheet
    ///
    /// `range` is an A1-notation range; passing a bare worksheet name
    /// returns the whole sheet. Trailing empty cells are absent from the
    /// returned rows, so callers must index defensively.
    pub async fn values(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let endpoint = format!("{}/{}/values/{}", self.base_url, self.spreadsheet_id, range);
        debug!("fetching range '{}'", range);

        let response = self
            .http
            .get(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::sheet_request_failed(endpoint.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(AppError::Sheet(SheetError::BadResponse {
                endpoint,
                status: status.as_u16(),
                message: body.error.message,
            }));
        }

        let payload: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::sheet_request_failed(endpoint, e))?;

        Ok(payload.values)
    }
}

/// Accept either a bare spreadsheet id or a full Sheets URL
pub fn extract_spreadsheet_id(spreadsheet: &str) -> String {
    if let Ok(re) = Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)") {
        if let Some(cap) = re.captures(spreadsheet) {
            if let Some(id) = cap.get(1) {
                return id.as_str().to_string();
            }
        }
    }
    spreadsheet.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(extract_spreadsheet_id("1BHkAT3j75_jq"), "1BHkAT3j75_jq");
        assert_eq!(extract_spreadsheet_id("  Shooting "), "Shooting");
    }

    #[test]
    fn full_url_yields_the_id() {
        let url = "https://docs.google.com/spreadsheets/d/1BHkAT3j75_jq5qM5p1AZ73NaR4Jhcx/edit?usp=sharing";
        assert_eq!(
            extract_spreadsheet_id(url),
            "1BHkAT3j75_jq5qM5p1AZ73NaR4Jhcx"
        );
    }

    #[test]
    fn value_range_decodes_with_and_without_rows() {
        let with_rows: ValueRange =
            serde_json::from_str(r#"{"range":"A1:B2","values":[["a","b"],["c"]]}"#).unwrap();
        assert_eq!(with_rows.values, vec![vec!["a", "b"], vec!["c"]]);

        // empty worksheets omit the values key entirely
        let empty: ValueRange = serde_json::from_str(r#"{"range":"A1:B2"}"#).unwrap();
        assert!(empty.values.is_empty());
    }
}
