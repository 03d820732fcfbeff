use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::machine::{Phase, Tally};
use crate::card::Card;

/// Everything a renderer needs to draw the session at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub remaining_secs: u64,
    pub timer_running: bool,
    pub card_count: usize,
    pub top_card: Option<Card>,
    pub answer_revealed: bool,
    pub tally: Tally,
    pub at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// "Start again" is offered once the pile is empty.
    pub fn can_restart(&self) -> bool {
        self.phase == Phase::Exhausted
    }
}
