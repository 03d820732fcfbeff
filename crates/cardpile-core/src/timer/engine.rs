//! Session countdown.
//!
//! The timer does not own a clock or a thread. The caller feeds it one
//! `tick()` per elapsed second; everything else is a plain state change.
//!
//! ```text
//! running --pause--> paused --resume--> running
//! running --tick x N--> 0 (further ticks are no-ops)
//! ```
//!
//! ## Usage
//!
//! ```
//! use cardpile_core::SessionTimer;
//!
//! let mut timer = SessionTimer::new(3);
//! timer.tick();
//! timer.tick();
//! assert!(timer.tick().is_some()); // reached zero
//! assert_eq!(timer.remaining_secs(), 0);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Length of a study session unless configured otherwise.
pub const DEFAULT_DURATION_SECS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTimer {
    remaining_secs: u64,
    running: bool,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl SessionTimer {
    /// A running timer with `secs` on the clock.
    pub fn new(secs: u64) -> Self {
        Self {
            remaining_secs: secs,
            running: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Count down one second. Returns `Some(Event::TimerExpired)` on the tick
    /// that reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            return Some(Event::TimerExpired { at: Utc::now() });
        }
        None
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Resuming at zero is allowed; ticks stay no-ops.
    pub fn resume(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerResumed {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self, secs: u64) {
        self.remaining_secs = secs;
        self.running = true;
    }
}
