//! Process lockdown - business capability layer
//!
//! Startup sweep plus a background monitor that polls the OS process table
//! and terminates disallowed applications by name. Termination failures
//! (permission denied, process already gone) are ignored per process.

use crate::config::Config;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use sysinfo::System;
use tracing::{info, warn};

/// Game processes terminated unconditionally
const BLOCKED_GAMES: &[&str] = &["robloxplayerbeta", "roblox", "robloxstudio"];

/// Applications terminated in every mode
const UNSAFE_APPS: &[&str] = &["cmd", "notepad"];

/// Escape hatches only tolerated in debug mode
const UNSAFE_BROWSERS: &[&str] = &["chrome", "firefox", "msedge", "powershell"];

/// Lowercased process name with a trailing `.exe` stripped
fn canonical_name(name: &str) -> String {
    let lower = name.to_lowercase();
    lower.strip_suffix(".exe").unwrap_or(&lower).to_string()
}

/// Whether a process of this name must be terminated
fn is_disallowed(name: &str, debug_mode: bool) -> bool {
    let canonical = canonical_name(name);
    if BLOCKED_GAMES.contains(&canonical.as_str()) {
        return true;
    }
    if UNSAFE_APPS.contains(&canonical.as_str()) {
        return true;
    }
    !debug_mode && UNSAFE_BROWSERS.contains(&canonical.as_str())
}

/// One pass over the process table, terminating every disallowed match
///
/// Returns the number of processes that accepted the kill signal.
pub fn sweep(debug_mode: bool) -> usize {
    let mut sys = System::new();
    sys.refresh_processes();

    let own_pid = sysinfo::get_current_pid().ok();
    let mut killed = 0;

    for (pid, process) in sys.processes() {
        if Some(*pid) == own_pid {
            continue;
        }
        if is_disallowed(process.name(), debug_mode) {
            // a false return means the process was gone or protected
            if process.kill() {
                info!("terminated {} (pid {})", process.name(), pid);
                killed += 1;
            }
        }
    }

    killed
}

/// Background process monitor
///
/// Polls on a fixed interval and is stopped by flipping a shared flag; no
/// join or cancellation acknowledgment, the task dies with the runtime at
/// the latest.
pub struct ProcessMonitor {
    running: Arc<AtomicBool>,
    interval: Duration,
    debug_mode: bool,
}

impl ProcessMonitor {
    pub fn new(config: &Config) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
            interval: Duration::from_secs(config.monitor_interval_secs),
            debug_mode: config.debug_mode,
        }
    }

    /// Start polling in the background (release mode only)
    pub fn start(&self) {
        if self.debug_mode {
            info!("debug mode, process monitor stays off");
            return;
        }

        let running = Arc::clone(&self.running);
        let interval = self.interval;
        info!("process monitor started ({}s interval)", interval.as_secs());

        tokio::spawn(async move {
            let mut sys = System::new();
            while running.load(Ordering::Relaxed) {
                sys.refresh_processes();
                for process in sys.processes().values() {
                    if is_disallowed(process.name(), false) && process.kill() {
                        info!("monitor terminated {}", process.name());
                    }
                }
                tokio::time::sleep(interval).await;
            }
            warn!("process monitor loop exited");
        });
    }

    /// Request the monitor to stop after its current pass
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
        info!("process monitor stop requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_case_insensitively_with_or_without_exe() {
        assert!(is_disallowed("Notepad.EXE", true));
        assert!(is_disallowed("cmd", true));
        assert!(!is_disallowed("explorer.exe", false));
        assert!(!is_disallowed("notepad++.exe", false));
    }

    #[test]
    fn blocked_games_are_terminated_in_every_mode() {
        for name in ["RobloxPlayerBeta.exe", "roblox", "RobloxStudio.exe"] {
            assert!(is_disallowed(name, true), "debug should block {}", name);
            assert!(is_disallowed(name, false), "release should block {}", name);
        }
    }

    #[test]
    fn browsers_are_tolerated_only_in_debug_mode() {
        for name in ["chrome.exe", "firefox", "msedge.exe", "powershell.exe"] {
            assert!(!is_disallowed(name, true), "debug should allow {}", name);
            assert!(is_disallowed(name, false), "release should block {}", name);
        }
    }

    #[test]
    fn stop_flips_the_shared_flag() {
        let monitor = ProcessMonitor::new(&Config::default());
        assert!(monitor.running.load(Ordering::Relaxed));
        monitor.stop();
        assert!(!monitor.running.load(Ordering::Relaxed));
    }
}
