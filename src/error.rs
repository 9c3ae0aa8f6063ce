use std::fmt;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Spreadsheet retrieval errors
    Sheet(SheetError),
    /// Mail dispatch errors
    Mail(MailError),
    /// Other errors (wrapping third-party library errors)
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Sheet(e) => write!(f, "spreadsheet error: {}", e),
            AppError::Mail(e) => write!(f, "mail error: {}", e),
            AppError::Other(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Sheet(e) => Some(e),
            AppError::Mail(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// Spreadsheet retrieval errors
#[derive(Debug)]
pub enum SheetError {
    /// The weekly worksheet does not exist
    WorksheetNotFound {
        sheet: String,
        date: String,
    },
    /// Network request failed
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The API answered with a non-success status
    BadResponse {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The weekly worksheet has no usable proverbs
    EmptyWordList {
        sheet: String,
    },
    /// Response body could not be decoded
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::WorksheetNotFound { sheet, date } => {
                write!(f, "worksheet '{}' does not exist (today: {})", sheet, date)
            }
            SheetError::RequestFailed { endpoint, source } => {
                write!(f, "request failed ({}): {}", endpoint, source)
            }
            SheetError::BadResponse {
                endpoint,
                status,
                message,
            } => {
                write!(
                    f,
                    "bad response ({}): status={}, message={}",
                    endpoint, status, message
                )
            }
            SheetError::EmptyWordList { sheet } => {
                write!(f, "worksheet '{}' contains no proverbs", sheet)
            }
            SheetError::JsonParseFailed { source } => {
                write!(f, "JSON decode failed: {}", source)
            }
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::RequestFailed { source, .. } | SheetError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// Mail dispatch errors
#[derive(Debug)]
pub enum MailError {
    /// A sender or recipient address did not parse
    InvalidAddress {
        address: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The message could not be assembled
    BuildFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// SMTP delivery failed
    SendFailed {
        host: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// No recipients configured
    NoRecipients,
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::InvalidAddress { address, source } => {
                write!(f, "invalid address '{}': {}", address, source)
            }
            MailError::BuildFailed { source } => {
                write!(f, "message build failed: {}", source)
            }
            MailError::SendFailed { host, source } => {
                write!(f, "SMTP send failed ({}): {}", host, source)
            }
            MailError::NoRecipients => write!(f, "no recipients configured"),
        }
    }
}

impl std::error::Error for MailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MailError::InvalidAddress { source, .. }
            | MailError::BuildFailed { source }
            | MailError::SendFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            MailError::NoRecipients => None,
        }
    }
}

// ========== conversions from common error types ==========
// No manual From<AppError> for anyhow::Error is needed; anyhow already
// covers every type implementing std::error::Error.

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Sheet(SheetError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== convenience constructors ==========

impl AppError {
    /// Sheet request failure
    pub fn sheet_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Sheet(SheetError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// Missing weekly worksheet
    pub fn worksheet_not_found(sheet: impl Into<String>, date: impl Into<String>) -> Self {
        AppError::Sheet(SheetError::WorksheetNotFound {
            sheet: sheet.into(),
            date: date.into(),
        })
    }

    /// Mail delivery failure
    pub fn mail_send_failed(
        host: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Mail(MailError::SendFailed {
            host: host.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;
