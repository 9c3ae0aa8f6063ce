/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Spreadsheet id or full Google Sheets URL
    pub spreadsheet: String,
    /// Google Sheets API key
    pub sheets_api_key: String,
    /// Weekly worksheet name prefix (ISO week number is appended)
    pub sheet_prefix: String,
    /// Worksheet holding the message template and hidden exit code
    pub info_sheet: String,
    /// Header cell marking the proverb column
    pub quiz_header: String,
    /// Cumulative accuracy required to finish the quiz
    pub accuracy_threshold: f64,
    /// Seconds between process-table sweeps
    pub monitor_interval_secs: u64,
    /// Hour (local) before which the quiz refuses to start
    pub earliest_hour: u32,
    /// Per-run log file, overwritten at startup
    pub log_file: String,
    /// Debug mode relaxes the lockdown (no monitor, browsers allowed)
    pub debug_mode: bool,
    // --- mail ---
    pub smtp_host: String,
    pub mail_sender: String,
    /// Comma-separated recipient list
    pub mail_recipients: String,
    pub mail_password: String,
    pub mail_subject: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet: "Shooting".to_string(),
            sheets_api_key: String::new(),
            sheet_prefix: "Tajazzang_CW".to_string(),
            info_sheet: "info_tajazzang".to_string(),
            quiz_header: "proverb".to_string(),
            accuracy_threshold: 0.8,
            monitor_interval_secs: 2,
            earliest_hour: 8,
            log_file: "tajazzang.log".to_string(),
            debug_mode: cfg!(debug_assertions),
            smtp_host: "smtp.gmail.com".to_string(),
            mail_sender: "tajazzang@example.com".to_string(),
            mail_recipients: "guardian@example.com".to_string(),
            mail_password: String::new(),
            mail_subject: "Tajazzang missed proverbs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            spreadsheet: std::env::var("SPREADSHEET").unwrap_or(default.spreadsheet),
            sheets_api_key: std::env::var("SHEETS_API_KEY").unwrap_or(default.sheets_api_key),
            sheet_prefix: std::env::var("SHEET_PREFIX").unwrap_or(default.sheet_prefix),
            info_sheet: std::env::var("INFO_SHEET").unwrap_or(default.info_sheet),
            quiz_header: std::env::var("QUIZ_HEADER").unwrap_or(default.quiz_header),
            accuracy_threshold: std::env::var("ACCURACY_THRESHOLD").ok().and_then(|v| v.parse().ok()).unwrap_or(default.accuracy_threshold),
            monitor_interval_secs: std::env::var("MONITOR_INTERVAL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.monitor_interval_secs),
            earliest_hour: std::env::var("EARLIEST_HOUR").ok().and_then(|v| v.parse().ok()).unwrap_or(default.earliest_hour),
            log_file: std::env::var("LOG_FILE").unwrap_or(default.log_file),
            debug_mode: std::env::var("DEBUG_MODE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.debug_mode),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(default.smtp_host),
            mail_sender: std::env::var("MAIL_SENDER").unwrap_or(default.mail_sender),
            mail_recipients: std::env::var("MAIL_RECIPIENTS").unwrap_or(default.mail_recipients),
            mail_password: std::env::var("MAIL_PASSWORD").unwrap_or(default.mail_password),
            mail_subject: std::env::var("MAIL_SUBJECT").unwrap_or(default.mail_subject),
        }
    }

    /// Recipient list split out of the comma-separated env form.
    pub fn recipients(&self) -> Vec<String> {
        self.mail_recipients
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
