//! Shared piles: the face-down draw pile and the face-up discard pile.
//!
//! Both piles keep the top card at the end of the vec.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// The face-down draw pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Create a pile from cards, bottom first.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Shuffle `cards` and put them under the current pile.
    pub fn refill(&mut self, mut cards: Vec<Card>, rng: &mut GameRng) {
        rng.shuffle(&mut cards);
        cards.append(&mut self.cards);
        self.cards = cards;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The face-up discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The most recently discarded card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Empty the pile, returning its cards.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
