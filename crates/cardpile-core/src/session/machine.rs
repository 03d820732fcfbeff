//! Study session state machine.
//!
//! Composes a [`Deck`] and a [`SessionTimer`] and turns the three external
//! inputs (clock ticks, classified gestures, foreground changes) into phase
//! transitions. Every method runs to completion before returning; a host
//! with more than one thread must funnel calls through a single executor.
//!
//! ## Phases
//!
//! ```text
//!            tick reaches 0 (cards left)
//!  Active ───────────────────────────────▶ Expired
//!    │
//!    │ last card removed
//!    ▼
//!  Exhausted            reset(cards) ─▶ Active | Exhausted
//! ```
//!
//! The phase is re-derived after every mutation. An empty deck always wins
//! over an expired clock.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::snapshot::SessionSnapshot;
use crate::card::Card;
use crate::deck::Deck;
use crate::events::Event;
use crate::gesture::{Drag, Gesture, Outcome, Thresholds};
use crate::storage::{BlobStore, CardStore};
use crate::timer::{SessionTimer, DEFAULT_DURATION_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Active,
    /// Time ran out with cards left. The pile is frozen.
    Expired,
    /// No cards left.
    Exhausted,
}

/// Running count of judged cards, for feedback only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u32,
    pub incorrect: u32,
}

/// One event from one of the session's producers.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Tick,
    Gesture(Gesture),
    Foreground(bool),
    ToggleAnswer,
    Reset(Vec<Card>),
}

#[derive(Debug, Clone)]
pub struct StudySession {
    deck: Deck,
    timer: SessionTimer,
    phase: Phase,
    duration_secs: u64,
    tally: Tally,
    answer_revealed: bool,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl StudySession {
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_duration(cards, DEFAULT_DURATION_SECS)
    }

    pub fn with_duration(cards: Vec<Card>, duration_secs: u64) -> Self {
        let mut session = Self {
            deck: Deck::default(),
            timer: SessionTimer::new(duration_secs),
            phase: Phase::Exhausted,
            duration_secs,
            tally: Tally::default(),
            answer_revealed: false,
        };
        session.reset(cards);
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.deck.top_card()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn is_answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Whether the top card may be dragged, tapped or judged.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            remaining_secs: self.timer.remaining_secs(),
            timer_running: self.timer.is_running(),
            card_count: self.deck.len(),
            top_card: self.deck.top_card().cloned(),
            answer_revealed: self.answer_revealed,
            tally: self.tally,
            at: Utc::now(),
        }
    }

    // ── Inputs ───────────────────────────────────────────────────────

    /// One elapsed second.
    pub fn on_tick(&mut self) -> Option<Event> {
        let expired = self.timer.tick();
        self.settle();
        if self.phase == Phase::Expired {
            if expired.is_some() {
                tracing::info!(cards_left = self.deck.len(), "session time expired");
            }
            return expired;
        }
        None
    }

    /// `n` seconds delivered at once by a clock that fell behind.
    pub fn on_ticks(&mut self, n: u64) -> Vec<Event> {
        if !self.timer.is_running() {
            return Vec::new();
        }
        let steps = n.min(self.timer.remaining_secs());
        (0..steps).filter_map(|_| self.on_tick()).collect()
    }

    /// Open a drag on the current top card.
    pub fn begin_drag(&self, thresholds: Thresholds) -> Option<Drag> {
        if !self.accepts_input() {
            return None;
        }
        let top = self.deck.top_card()?;
        Some(Drag::begin(top.id(), thresholds))
    }

    /// Apply a finished drag. Both swipe directions remove the card the drag
    /// started on; the direction only feeds the tally.
    pub fn on_gesture(&mut self, gesture: Gesture) -> Vec<Event> {
        let mut events = Vec::new();
        if !gesture.outcome.removes_card() {
            return events;
        }
        if !self.accepts_input() {
            tracing::debug!(phase = ?self.phase, "gesture ignored");
            events.push(Event::GestureIgnored {
                phase: self.phase,
                at: Utc::now(),
            });
            return events;
        }

        let Some(card) = self.deck.remove(gesture.card_id) else {
            tracing::debug!(card_id = %gesture.card_id, "gesture for a card no longer in the deck");
            return events;
        };
        match gesture.outcome {
            Outcome::SwipedRight => self.tally.correct += 1,
            Outcome::SwipedLeft => self.tally.incorrect += 1,
            Outcome::Cancelled => {}
        }
        self.answer_revealed = false;
        tracing::debug!(card_id = %card.id(), outcome = ?gesture.outcome, "card removed");
        events.push(Event::CardRemoved {
            card_id: card.id(),
            outcome: gesture.outcome,
            remaining_cards: self.deck.len(),
            at: Utc::now(),
        });

        if self.deck.is_empty() {
            events.extend(self.timer.pause());
            events.push(Event::DeckExhausted { at: Utc::now() });
            tracing::info!(
                correct = self.tally.correct,
                incorrect = self.tally.incorrect,
                "deck exhausted"
            );
        }
        self.settle();
        events
    }

    /// Judge whatever card is on top right now (the wrong/correct buttons).
    pub fn judge_top(&mut self, outcome: Outcome) -> Vec<Event> {
        match self.deck.top_card() {
            Some(top) => {
                let card_id = top.id();
                self.on_gesture(Gesture { card_id, outcome })
            }
            None => Vec::new(),
        }
    }

    /// Tap on the top card.
    pub fn toggle_answer(&mut self) -> Option<Event> {
        if !self.accepts_input() {
            return None;
        }
        let card_id = self.deck.top_card()?.id();
        self.answer_revealed = !self.answer_revealed;
        Some(Event::AnswerToggled {
            card_id,
            revealed: self.answer_revealed,
            at: Utc::now(),
        })
    }

    pub fn on_foreground_change(&mut self, is_foreground: bool) -> Option<Event> {
        if is_foreground {
            if self.phase == Phase::Active && !self.deck.is_empty() {
                return self.timer.resume();
            }
            None
        } else {
            self.timer.pause()
        }
    }

    /// Start over with `cards` and a full clock.
    pub fn reset(&mut self, cards: Vec<Card>) -> Event {
        self.deck.reset(cards);
        self.timer.reset(self.duration_secs);
        self.tally = Tally::default();
        self.answer_revealed = false;
        self.settle();
        if self.phase == Phase::Exhausted {
            self.timer.pause();
        }
        tracing::info!(cards = self.deck.len(), phase = ?self.phase, "session reset");
        Event::SessionReset {
            card_count: self.deck.len(),
            duration_secs: self.duration_secs,
            phase: self.phase,
            at: Utc::now(),
        }
    }

    /// Reset from whatever the store currently holds.
    pub fn reload<S: BlobStore>(&mut self, store: &CardStore<S>) -> Event {
        self.reset(store.load())
    }

    pub fn apply(&mut self, input: Input) -> Vec<Event> {
        match input {
            Input::Tick => self.on_tick().into_iter().collect(),
            Input::Gesture(gesture) => self.on_gesture(gesture),
            Input::Foreground(is_foreground) => {
                self.on_foreground_change(is_foreground).into_iter().collect()
            }
            Input::ToggleAnswer => self.toggle_answer().into_iter().collect(),
            Input::Reset(cards) => vec![self.reset(cards)],
        }
    }

    /// Apply everything that arrived within one logical step. Ticks go
    /// first so a gesture racing the last second is rejected.
    pub fn apply_step(&mut self, inputs: Vec<Input>) -> Vec<Event> {
        let (ticks, rest): (Vec<_>, Vec<_>) =
            inputs.into_iter().partition(|i| matches!(i, Input::Tick));
        ticks
            .into_iter()
            .chain(rest)
            .flat_map(|input| self.apply(input))
            .collect()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn settle(&mut self) {
        let next = if self.deck.is_empty() {
            Phase::Exhausted
        } else if self.timer.is_expired() {
            Phase::Expired
        } else {
            Phase::Active
        };
        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, "phase change");
            self.phase = next;
        }
    }
}
