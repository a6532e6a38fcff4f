//! Card kinds and card instances.
//!
//! `CardKind` is what a card *is* (a $2M note, a Green property, a Sly Deal).
//! `Card` is one physical card in a game: a kind, a face value, and the
//! `InstanceId` that tells it apart from every other card of the same kind.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorChoice};
use crate::core::entity::InstanceId;

/// Action card kinds. Houses and hotels are action cards in the printed deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    DealBreaker,
    JustSayNo,
    SlyDeal,
    ForcedDeal,
    DebtCollector,
    Birthday,
    PassGo,
    House,
    Hotel,
    DoubleTheRent,
}

impl ActionKind {
    /// Houses and hotels are placed on sets rather than resolved.
    #[must_use]
    pub const fn is_building(self) -> bool {
        matches!(self, ActionKind::House | ActionKind::Hotel)
    }

    /// Printed card title.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::DealBreaker => "Deal Breaker",
            ActionKind::JustSayNo => "Just Say No",
            ActionKind::SlyDeal => "Sly Deal",
            ActionKind::ForcedDeal => "Forced Deal",
            ActionKind::DebtCollector => "Debt Collector",
            ActionKind::Birthday => "It's My Birthday",
            ActionKind::PassGo => "Pass Go",
            ActionKind::House => "House",
            ActionKind::Hotel => "Hotel",
            ActionKind::DoubleTheRent => "Double The Rent",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A money note; its value is the face value.
    Money,
    /// A single-color property.
    Property(Color),
    /// A wild property that can sit in any of its colors.
    Wild(ColorChoice),
    /// A rent card for the given colors.
    Rent(ColorChoice),
    /// An action card.
    Action(ActionKind),
}

impl CardKind {
    /// Property cards (plain and wild) live on the board and cannot be banked.
    #[must_use]
    pub const fn is_property(self) -> bool {
        matches!(self, CardKind::Property(_) | CardKind::Wild(_))
    }

    /// The colors this card may be placed under on a board.
    #[must_use]
    pub fn property_colors(self) -> Vec<Color> {
        match self {
            CardKind::Property(color) => vec![color],
            CardKind::Wild(choice) => choice.colors(),
            _ => Vec::new(),
        }
    }

    /// The action kind, if this is an action card.
    #[must_use]
    pub const fn action(self) -> Option<ActionKind> {
        match self {
            CardKind::Action(kind) => Some(kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Money => f.write_str("Money"),
            CardKind::Property(color) => write!(f, "{} Property", color),
            CardKind::Wild(choice) => write!(f, "{} Wild", choice),
            CardKind::Rent(choice) => write!(f, "{} Rent", choice),
            CardKind::Action(kind) => write!(f, "{}", kind),
        }
    }
}

/// One physical card in a game.
///
/// Equality includes the instance id, so two $1M notes are different cards.
///
/// ```
/// use monopoly_deal::cards::{Card, CardKind};
/// use monopoly_deal::core::InstanceId;
///
/// let a = Card::new(InstanceId::new(1), CardKind::Money, 1);
/// let b = Card::new(InstanceId::new(2), CardKind::Money, 1);
/// assert_ne!(a, b);
/// assert_eq!(a.kind, b.kind);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this card.
    pub id: InstanceId,
    /// What the card is.
    pub kind: CardKind,
    /// Face value in millions. Zero cards cannot be used to pay.
    pub value: u32,
}

impl Card {
    #[must_use]
    pub const fn new(id: InstanceId, kind: CardKind, value: u32) -> Self {
        Self { id, kind, value }
    }

    /// Check if this card is the given action.
    #[must_use]
    pub fn is_action(&self, kind: ActionKind) -> bool {
        self.kind == CardKind::Action(kind)
    }

    /// An any-color wild. It cannot carry a set's rent on its own.
    #[must_use]
    pub fn is_rainbow_wild(&self) -> bool {
        self.kind == CardKind::Wild(ColorChoice::Any)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (${}M) {}", self.kind, self.value, self.id)
    }
}
