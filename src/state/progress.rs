//! Submission progress gauge state

use std::time::Duration;

/// Transient 0-100 gauge shown after a successful submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    percent: u16,
}

impl Progress {
    pub const FULL: u16 = 100;

    /// Delay before a filled gauge drops back to zero
    pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

    pub fn fill(&mut self) {
        self.percent = Self::FULL;
    }

    pub fn reset(&mut self) {
        self.percent = 0;
    }

    pub fn percent(&self) -> u16 {
        self.percent
    }

    pub fn is_active(&self) -> bool {
        self.percent > 0
    }
}
