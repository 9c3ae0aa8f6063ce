pub mod grading;
pub mod mail_report;
pub mod process_guard;
pub mod quiz_source;

pub use mail_report::MailReporter;
pub use process_guard::ProcessMonitor;
pub use quiz_source::{QuizContent, QuizSource};
