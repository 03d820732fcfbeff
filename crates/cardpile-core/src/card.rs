//! A study card: an immutable prompt/answer pair with a stable identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable card identifier, generated once at creation.
pub type CardId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Records written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    id: CardId,
    prompt: String,
    answer: String,
}

impl Card {
    /// Create a card with a newly generated id.
    ///
    /// Two cards built from the same text are still distinct cards.
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), prompt, answer)
    }

    pub fn with_id(id: CardId, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    pub fn example() -> Self {
        Self::new("Who is the largest shiba?", "Nanachi")
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
