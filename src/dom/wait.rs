use crate::error::{PageError, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Default timeout for wait operations (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (100ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Bounds for a polling wait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitOptions {
    pub timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self { timeout_ms: DEFAULT_WAIT_TIMEOUT_MS, poll_interval_ms: DEFAULT_POLL_INTERVAL_MS }
    }
}

impl WaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set timeout in milliseconds
    pub fn timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Builder method: set polling interval in milliseconds
    pub fn poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_duration(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Poll `predicate` until it returns `true` or the timeout elapses.
///
/// The predicate always runs at least once. Transient driver errors (a node
/// vanishing mid-navigation, a stale handle) count as "not yet"; any other
/// error aborts the wait. On timeout the error carries `description`.
pub fn wait_until<F>(options: &WaitOptions, description: &str, mut predicate: F) -> Result<()>
where
    F: FnMut() -> Result<bool>,
{
    let timeout = options.timeout_duration();
    let started = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match predicate() {
            Ok(true) => {
                log::debug!("Satisfied after {} attempt(s): {}", attempts, description);
                return Ok(());
            }
            Ok(false) => {}
            Err(e) if e.is_transient() => {
                log::debug!("Transient error while waiting ({}): {}", description, e);
            }
            Err(e) => return Err(e),
        }

        let elapsed = started.elapsed();
        if elapsed >= timeout {
            return Err(PageError::Timeout { description: description.to_string(), timeout });
        }
        std::thread::sleep(options.poll_duration().min(timeout - elapsed));
    }
}
