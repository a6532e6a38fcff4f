//! Card catalog: which cards make up the deck.
//!
//! A `CardCatalog` is a flat list of `(kind, value, count)` entries. The
//! standard catalog is the 106-card Monopoly Deal deck; custom catalogs are
//! used for variants and for tests that need a known deck.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorChoice};
use super::definition::{ActionKind, Card, CardKind};
use crate::core::entity::InstanceId;

/// One catalog line: `count` copies of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub kind: CardKind,
    pub value: u32,
    pub count: u32,
}

/// The deck composition for a game.
///
/// ```
/// use monopoly_deal::cards::{CardCatalog, CardKind};
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.total_cards(), 106);
///
/// let tiny = CardCatalog::new().with_card(CardKind::Money, 1, 4);
/// assert_eq!(tiny.total_cards(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    definitions: Vec<CardDefinition>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` copies of a card (builder pattern).
    ///
    /// Adding a kind and value that is already listed raises its count.
    #[must_use]
    pub fn with_card(mut self, kind: CardKind, value: u32, count: u32) -> Self {
        match self
            .definitions
            .iter_mut()
            .find(|def| def.kind == kind && def.value == value)
        {
            Some(def) => def.count += count,
            None => self.definitions.push(CardDefinition { kind, value, count }),
        }
        self
    }

    /// The standard 106-card deck.
    #[must_use]
    pub fn standard() -> Self {
        use ActionKind::*;
        use Color::*;

        let mut catalog = Self::new();

        for (value, count) in [(1, 6), (2, 5), (3, 3), (4, 3), (5, 2), (10, 1)] {
            catalog = catalog.with_card(CardKind::Money, value, count);
        }

        for (color, value) in [
            (Brown, 1),
            (LightBlue, 1),
            (Pink, 2),
            (Orange, 2),
            (Red, 3),
            (Yellow, 3),
            (Green, 4),
            (DarkBlue, 4),
            (Railroad, 2),
            (Utility, 2),
        ] {
            catalog = catalog.with_card(CardKind::Property(color), value, color.set_size() as u32);
        }

        for (a, b, value, count) in [
            (DarkBlue, Green, 4, 1),
            (Green, Railroad, 4, 1),
            (LightBlue, Brown, 1, 1),
            (LightBlue, Railroad, 4, 1),
            (Railroad, Utility, 2, 1),
            (Orange, Pink, 2, 2),
            (Red, Yellow, 3, 2),
        ] {
            catalog = catalog.with_card(CardKind::Wild(ColorChoice::Pair(a, b)), value, count);
        }
        catalog = catalog.with_card(CardKind::Wild(ColorChoice::Any), 0, 2);

        for (kind, value, count) in [
            (DealBreaker, 5, 2),
            (JustSayNo, 4, 3),
            (SlyDeal, 3, 3),
            (ForcedDeal, 3, 4),
            (DebtCollector, 3, 3),
            (Birthday, 2, 3),
            (PassGo, 1, 10),
            (House, 3, 3),
            (Hotel, 4, 2),
            (DoubleTheRent, 1, 2),
        ] {
            catalog = catalog.with_card(CardKind::Action(kind), value, count);
        }

        for (a, b) in [
            (DarkBlue, Green),
            (Red, Yellow),
            (Pink, Orange),
            (LightBlue, Brown),
            (Railroad, Utility),
        ] {
            catalog = catalog.with_card(CardKind::Rent(ColorChoice::Pair(a, b)), 1, 2);
        }
        catalog.with_card(CardKind::Rent(ColorChoice::Any), 3, 3)
    }

    /// All catalog lines.
    #[must_use]
    pub fn definitions(&self) -> &[CardDefinition] {
        &self.definitions
    }

    /// Total number of physical cards.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.definitions.iter().map(|def| def.count as usize).sum()
    }

    /// Create one `Card` per copy, numbering instances from `first_id`.
    ///
    /// Cards come out in catalog order; the caller shuffles.
    #[must_use]
    pub fn materialize(&self, first_id: u32) -> Vec<Card> {
        self.definitions
            .iter()
            .flat_map(|def| (0..def.count).map(move |_| (def.kind, def.value)))
            .enumerate()
            .map(|(i, (kind, value))| Card::new(InstanceId(first_id + i as u32), kind, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn count_where(catalog: &CardCatalog, pred: impl Fn(CardKind) -> bool) -> usize {
        catalog
            .definitions()
            .iter()
            .filter(|def| pred(def.kind))
            .map(|def| def.count as usize)
            .sum()
    }

    #[test]
    fn test_standard_composition() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.total_cards(), 106);
        assert_eq!(count_where(&catalog, |k| k == CardKind::Money), 20);
        assert_eq!(count_where(&catalog, |k| matches!(k, CardKind::Property(_))), 28);
        assert_eq!(count_where(&catalog, |k| matches!(k, CardKind::Wild(_))), 11);
        assert_eq!(count_where(&catalog, |k| matches!(k, CardKind::Action(_))), 34);
        assert_eq!(count_where(&catalog, |k| matches!(k, CardKind::Rent(_))), 13);
    }

    #[test]
    fn test_standard_action_counts() {
        let catalog = CardCatalog::standard();

        assert_eq!(count_where(&catalog, |k| k == CardKind::Action(ActionKind::PassGo)), 10);
        assert_eq!(count_where(&catalog, |k| k == CardKind::Action(ActionKind::JustSayNo)), 3);
        assert_eq!(count_where(&catalog, |k| k == CardKind::Action(ActionKind::DealBreaker)), 2);
        assert_eq!(count_where(&catalog, |k| k == CardKind::Rent(ColorChoice::Any)), 3);
        assert_eq!(count_where(&catalog, |k| k == CardKind::Wild(ColorChoice::Any)), 2);
    }

    #[test]
    fn test_money_total() {
        let catalog = CardCatalog::standard();
        let total: u32 = catalog
            .definitions()
            .iter()
            .filter(|def| def.kind == CardKind::Money)
            .map(|def| def.value * def.count)
            .sum();
        assert_eq!(total, 57);
    }

    #[test]
    fn test_with_card_merges_counts() {
        let catalog = CardCatalog::new()
            .with_card(CardKind::Money, 1, 2)
            .with_card(CardKind::Money, 1, 3)
            .with_card(CardKind::Money, 2, 1);

        assert_eq!(catalog.definitions().len(), 2);
        assert_eq!(catalog.total_cards(), 6);
    }

    #[test]
    fn test_materialize_unique_ids() {
        let cards = CardCatalog::standard().materialize(0);
        assert_eq!(cards.len(), 106);

        let ids: FxHashSet<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 106);
        assert_eq!(cards[0].id, InstanceId(0));
        assert_eq!(cards[105].id, InstanceId(105));
    }

    #[test]
    fn test_catalog_serialization() {
        let catalog = CardCatalog::new()
            .with_card(CardKind::Wild(ColorChoice::Pair(Color::Red, Color::Yellow)), 3, 2);
        let json = serde_json::to_string(&catalog).unwrap();
        let deserialized: CardCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, deserialized);
    }
}
