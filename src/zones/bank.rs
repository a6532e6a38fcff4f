//! A player's bank: money notes and banked action cards.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::entity::InstanceId;

/// Face-up money pile. Only its total matters for play; cards are kept
/// individually because payments hand over whole cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    cards: Vec<Card>,
}

impl Bank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a card by instance id.
    pub fn withdraw(&mut self, id: InstanceId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Total value in millions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|c| c.value).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
