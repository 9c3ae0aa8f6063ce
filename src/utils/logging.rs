//! Logging setup
//!
//! The console is reserved for the quiz itself, so all tracing output goes
//! to a single log file that is overwritten on every run.

use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber onto the per-run log file
pub fn init(log_file_path: &str) -> Result<()> {
    // File::create truncates: one log file per run
    let file = File::create(log_file_path)
        .with_context(|| format!("cannot create log file: {}", log_file_path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();

    Ok(())
}

/// Truncate long text for log display
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        // multi-byte characters count as one
        assert_eq!(truncate_text("가나다라", 2), "가나...");
    }
}
