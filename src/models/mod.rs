pub mod session;
pub mod template;

pub use session::{QuizSession, RoundOutcome, Verdict};
pub use template::MessageTemplate;
