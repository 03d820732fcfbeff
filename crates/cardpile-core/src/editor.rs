//! Card list editing.
//!
//! The editor keeps its own copy of the saved list and writes it back after
//! every change. A running [`StudySession`](crate::StudySession) never sees
//! these edits until it is reloaded.

use crate::card::{Card, CardId};
use crate::error::{Result, ValidationError};
use crate::storage::{BlobStore, CardStore};

pub struct DeckEditor<S> {
    store: CardStore<S>,
    cards: Vec<Card>,
}

impl<S: BlobStore> DeckEditor<S> {
    pub fn open(store: CardStore<S>) -> Self {
        let cards = store.load();
        Self { store, cards }
    }

    /// Cards in list order, newest first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn store(&self) -> &CardStore<S> {
        &self.store
    }

    /// Add a card at the head of the list.
    ///
    /// # Errors
    /// Returns a validation error if either side is blank after trimming,
    /// or a storage error if saving fails.
    pub fn add_card(&mut self, prompt: &str, answer: &str) -> Result<Card> {
        let prompt = non_empty("prompt", prompt)?;
        let answer = non_empty("answer", answer)?;
        let card = Card::new(prompt, answer);
        self.cards.insert(0, card.clone());
        self.store.save(&self.cards)?;
        tracing::info!(card_id = %card.id(), "card added");
        Ok(card)
    }

    /// Delete cards by list position.
    ///
    /// # Errors
    /// Fails without changing anything if any offset is out of range.
    pub fn remove_at(&mut self, offsets: &[usize]) -> Result<Vec<Card>> {
        let len = self.cards.len();
        if let Some(&index) = offsets.iter().find(|&&i| i >= len) {
            return Err(ValidationError::OutOfBounds {
                collection: "cards".into(),
                index,
                len,
            }
            .into());
        }
        let mut sorted = offsets.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let removed: Vec<Card> = sorted
            .into_iter()
            .rev()
            .map(|i| self.cards.remove(i))
            .collect();
        self.store.save(&self.cards)?;
        Ok(removed)
    }

    /// Delete a card by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: CardId) -> Result<Option<Card>> {
        let Some(index) = self.cards.iter().position(|c| c.id() == id) else {
            return Ok(None);
        };
        let card = self.cards.remove(index);
        self.store.save(&self.cards)?;
        Ok(Some(card))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.cards.clear();
        self.store.save(&self.cards)
    }

    /// Hand the list back for a fresh session.
    pub fn done(self) -> Vec<Card> {
        self.cards
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
