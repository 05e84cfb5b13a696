//! Clock collaborator
//!
//! Activities carry a human-readable timestamp string. The store takes the
//! clock as a trait object so tests can pin the time.

use chrono::Local;

/// Supplies the timestamp string recorded on new ledger activities
pub trait Clock {
    /// Current time as a short human-readable label, e.g. "2:30 PM"
    fn timestamp(&self) -> String;
}

/// Wall-clock implementation using the local timezone
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format("%-I:%M %p").to_string()
    }
}

/// Clock that always returns the same label. Used by tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
