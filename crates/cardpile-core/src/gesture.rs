//! Drag classification.
//!
//! The presentation layer owns pointer tracking. It opens a [`Drag`] when the
//! user grabs the top card, feeds it horizontal displacement, and on release
//! hands the resulting [`Gesture`] to the study session. Only the classified
//! outcome crosses into the core.

use serde::{Deserialize, Serialize};

use crate::card::CardId;

/// Horizontal displacement a drag must exceed to judge the card.
pub const REMOVAL_THRESHOLD: f64 = 100.0;

/// Displacement at which visual feedback starts.
pub const FEEDBACK_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Marked correct.
    SwipedRight,
    /// Marked incorrect.
    SwipedLeft,
    Cancelled,
}

impl Outcome {
    pub fn removes_card(self) -> bool {
        !matches!(self, Outcome::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub removal: f64,
    pub feedback: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            removal: REMOVAL_THRESHOLD,
            feedback: FEEDBACK_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Classify the final displacement of a drag.
    pub fn classify(&self, dx: f64) -> Outcome {
        if dx.abs() > self.removal {
            if dx > 0.0 {
                Outcome::SwipedRight
            } else {
                Outcome::SwipedLeft
            }
        } else {
            Outcome::Cancelled
        }
    }

    /// Card opacity while dragging: 1.0 up to the feedback threshold, fading
    /// linearly to 0.0 at twice that distance.
    pub fn fade(&self, dx: f64) -> f64 {
        if self.feedback <= 0.0 {
            return 1.0;
        }
        (2.0 - dx.abs() / self.feedback).clamp(0.0, 1.0)
    }
}

/// Classify with the default thresholds.
pub fn classify(dx: f64) -> Outcome {
    Thresholds::default().classify(dx)
}

/// A finished drag, bound to the card that was on top when it began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    pub card_id: CardId,
    pub outcome: Outcome,
}

/// An in-flight drag.
#[derive(Debug, Clone)]
pub struct Drag {
    card_id: CardId,
    dx: f64,
    thresholds: Thresholds,
}

impl Drag {
    /// Start dragging `card_id`. The id is fixed for the drag's lifetime.
    pub fn begin(card_id: CardId, thresholds: Thresholds) -> Self {
        Self {
            card_id,
            dx: 0.0,
            thresholds,
        }
    }

    pub fn update(&mut self, dx: f64) {
        self.dx = dx;
    }

    pub fn offset(&self) -> f64 {
        self.dx
    }

    pub fn opacity(&self) -> f64 {
        self.thresholds.fade(self.dx)
    }

    pub fn end(self) -> Gesture {
        Gesture {
            card_id: self.card_id,
            outcome: self.thresholds.classify(self.dx),
        }
    }

    /// Abandon the drag without judging the card.
    pub fn cancel(self) -> Gesture {
        Gesture {
            card_id: self.card_id,
            outcome: Outcome::Cancelled,
        }
    }
}
