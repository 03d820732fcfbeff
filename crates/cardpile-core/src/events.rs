use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::gesture::Outcome;
use crate::session::Phase;

/// Every state change in a study session produces an Event.
/// The presentation layer renders from these; the CLI prints them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    CardRemoved {
        card_id: CardId,
        outcome: Outcome,
        remaining_cards: usize,
        at: DateTime<Utc>,
    },
    /// A gesture arrived while the session was not accepting input.
    GestureIgnored {
        phase: Phase,
        at: DateTime<Utc>,
    },
    /// The answer of the top card was shown or hidden.
    AnswerToggled {
        card_id: CardId,
        revealed: bool,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerExpired {
        at: DateTime<Utc>,
    },
    DeckExhausted {
        at: DateTime<Utc>,
    },
    SessionReset {
        card_count: usize,
        duration_secs: u64,
        phase: Phase,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::CardRemoved { at, .. }
            | Event::GestureIgnored { at, .. }
            | Event::AnswerToggled { at, .. }
            | Event::TimerPaused { at, .. }
            | Event::TimerResumed { at, .. }
            | Event::TimerExpired { at }
            | Event::DeckExhausted { at }
            | Event::SessionReset { at, .. } => *at,
        }
    }
}
