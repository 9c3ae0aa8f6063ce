//! # Tajazzang
//!
//! A kiosk-style typing-practice quiz for a single child user: fetch this
//! week's proverbs from a spreadsheet, quiz until the accuracy threshold is
//! met, mail the missed items to a guardian, and keep disallowed programs
//! closed while the quiz runs.
//!
//! ## Layering
//!
//! - `api/` - remote clients (Google Sheets `values` endpoint)
//! - `models/` - quiz session state, round-retry policy, message template
//! - `services/` - single capabilities: grading normalization, weekly quiz
//!   retrieval, report mail, process lockdown
//! - `workflow/` - the console quiz loop over one session
//! - `app` - orchestration: time gate, lockdown, fetch, quiz, report

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// re-export the common types
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{MessageTemplate, QuizSession, RoundOutcome, Verdict};
pub use services::{MailReporter, ProcessMonitor, QuizContent, QuizSource};
pub use workflow::{QuizFlow, QuizOutcome};
