//! A player's hand.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card};
use crate::core::entity::InstanceId;

/// Ordered cards held by one player, in the order they were received.
///
/// Index-based access is what the UI uses (`play_card(player, index)`);
/// id-based access is what actions use. Both address exactly one card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card at the end of the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Find a card by instance id.
    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Remove the card at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Remove a card by instance id.
    pub fn remove(&mut self, id: InstanceId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        self.remove_at(index)
    }

    /// Ids of the hand's cards of the given action kind.
    #[must_use]
    pub fn action_cards(&self, kind: ActionKind) -> Vec<InstanceId> {
        self.cards
            .iter()
            .filter(|c| c.is_action(kind))
            .map(|c| c.id)
            .collect()
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

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
