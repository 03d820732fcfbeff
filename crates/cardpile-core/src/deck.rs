//! The study pile.
//!
//! Cards are stored back-to-front: index 0 is the bottom of the pile and the
//! last element is the card currently in play. All mutation goes through
//! [`Deck::remove`] (by identity) and [`Deck::reset`].

use std::collections::HashSet;

use serde::Serialize;

use crate::card::{Card, CardId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut deck = Self::default();
        deck.reset(cards);
        deck
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The card in play, if any.
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards in pile order, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Remove the card with `id`. Returns the removed card.
    ///
    /// An unknown id is not an error: a gesture and a button press can both
    /// resolve against the same card, and the second one must be harmless.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().rposition(|c| c.id() == id)?;
        Some(self.cards.remove(index))
    }

    /// Replace the whole pile. Later duplicates of an id are dropped.
    pub fn reset(&mut self, cards: Vec<Card>) {
        let mut seen = HashSet::with_capacity(cards.len());
        let before = cards.len();
        self.cards = cards.into_iter().filter(|c| seen.insert(c.id())).collect();
        let dropped = before - self.cards.len();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped cards with duplicate ids");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (Deck, Card, Card, Card) {
        let a = Card::new("A", "a");
        let b = Card::new("B", "b");
        let c = Card::new("C", "c");
        (Deck::new(vec![a.clone(), b.clone(), c.clone()]), a, b, c)
    }

    #[test]
    fn top_is_last() {
        let (deck, _, _, c) = abc();
        assert_eq!(deck.top_card(), Some(&c));
        assert_eq!(Deck::default().top_card(), None);
    }

    #[test]
    fn remove_top_exposes_next() {
        let (mut deck, _, b, c) = abc();
        assert_eq!(deck.remove(c.id()), Some(c));
        assert_eq!(deck.top_card(), Some(&b));
    }

    #[test]
    fn remove_unknown_is_noop() {
        let (mut deck, ..) = abc();
        let before = deck.clone();
        assert!(deck.remove(CardId::new_v4()).is_none());
        assert_eq!(deck, before);
    }

    #[test]
    fn remove_twice_is_harmless() {
        let (mut deck, a, b, c) = abc();
        deck.remove(c.id());
        assert!(deck.remove(c.id()).is_none());
        assert_eq!(deck.cards(), &[a, b]);
    }

    #[test]
    fn remove_from_empty() {
        let mut deck = Deck::default();
        assert!(deck.remove(CardId::new_v4()).is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn reset_drops_duplicate_ids() {
        let a = Card::new("A", "a");
        let dup = Card::with_id(a.id(), "A again", "a");
        let deck = Deck::new(vec![a.clone(), dup, Card::new("B", "b")]);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards()[0], a);
    }

    #[test]
    fn same_text_cards_removed_individually() {
        let x = Card::new("same", "same");
        let y = Card::new("same", "same");
        let mut deck = Deck::new(vec![x.clone(), y.clone()]);
        deck.remove(y.id());
        assert_eq!(deck.cards(), &[x]);
    }
}
