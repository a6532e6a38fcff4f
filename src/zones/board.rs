//! A player's property board: one property set per color.
//!
//! ## Completion
//!
//! A set is complete when it holds at least `Color::set_size` cards and at
//! least one of them is not an any-color wild (rainbow wilds alone carry no
//! rent and never complete a set). Extra cards past the set size stay in the
//! set and add no rent.
//!
//! ## Buildings
//!
//! Houses and hotels sit on complete sets only. When a set stops being
//! complete (a property was stolen, paid away, or a wild moved out), its
//! buildings are stripped by `settle` and handed back for the owner's bank.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, Color};
use crate::core::entity::InstanceId;

/// Rent added by a house.
pub const HOUSE_RENT: u32 = 3;
/// Rent added by a hotel.
pub const HOTEL_RENT: u32 = 4;

/// The properties (and buildings) of one color on a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    color: Color,
    properties: Vec<Card>,
    house: Option<Card>,
    hotel: Option<Card>,
}

impl PropertySet {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            properties: Vec::new(),
            house: None,
            hotel: None,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn properties(&self) -> &[Card] {
        &self.properties
    }

    #[must_use]
    pub fn house(&self) -> Option<&Card> {
        self.house.as_ref()
    }

    #[must_use]
    pub fn hotel(&self) -> Option<&Card> {
        self.hotel.as_ref()
    }

    /// Number of property cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn has_anchor(&self) -> bool {
        self.properties.iter().any(|c| !c.is_rainbow_wild())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_anchor() && self.len() >= self.color.set_size()
    }

    /// Rent this set collects.
    #[must_use]
    pub fn rent(&self) -> u32 {
        if !self.has_anchor() {
            return 0;
        }
        let buildings = self.house.map_or(0, |_| HOUSE_RENT) + self.hotel.map_or(0, |_| HOTEL_RENT);
        self.color.rent(self.len()) + buildings
    }

    #[must_use]
    pub fn can_add_house(&self) -> bool {
        self.is_complete() && self.color.allows_buildings() && self.house.is_none()
    }

    #[must_use]
    pub fn can_add_hotel(&self) -> bool {
        self.is_complete() && self.color.allows_buildings() && self.house.is_some() && self.hotel.is_none()
    }

    /// Properties followed by buildings.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.properties.iter().chain(self.house.iter()).chain(self.hotel.iter())
    }

    fn strip_buildings(&mut self) -> Vec<Card> {
        self.house.take().into_iter().chain(self.hotel.take()).collect()
    }
}

/// All property sets of one player, keyed by color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBoard {
    sets: BTreeMap<Color, PropertySet>,
}

impl PropertyBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a property card under `color`. The caller checks the card allows it.
    pub fn place(&mut self, card: Card, color: Color) {
        self.sets
            .entry(color)
            .or_insert_with(|| PropertySet::new(color))
            .properties
            .push(card);
    }

    /// Remove a property card, returning it with the color it sat under.
    ///
    /// Buildings on the set are left alone; call `settle` afterwards.
    pub fn remove_property(&mut self, id: InstanceId) -> Option<(Card, Color)> {
        let set = self
            .sets
            .values_mut()
            .find(|set| set.properties.iter().any(|c| c.id == id))?;
        let index = set.properties.iter().position(|c| c.id == id)?;
        let card = set.properties.remove(index);
        Some((card, set.color))
    }

    /// Remove a house or hotel by id.
    pub fn remove_building(&mut self, id: InstanceId) -> Option<Card> {
        for set in self.sets.values_mut() {
            if set.house.map(|c| c.id) == Some(id) {
                return set.house.take();
            }
            if set.hotel.map(|c| c.id) == Some(id) {
                return set.hotel.take();
            }
        }
        None
    }

    /// Put a house or hotel on the set of `color`.
    ///
    /// Returns the card back if the set cannot take it.
    pub fn add_building(&mut self, card: Card, color: Color) -> Result<(), Card> {
        let Some(set) = self.sets.get_mut(&color) else {
            return Err(card);
        };
        match card.kind.action() {
            Some(ActionKind::House) if set.can_add_house() => set.house = Some(card),
            Some(ActionKind::Hotel) if set.can_add_hotel() => set.hotel = Some(card),
            _ => return Err(card),
        }
        Ok(())
    }

    /// Remove a whole set, buildings included.
    pub fn take_set(&mut self, color: Color) -> Option<PropertySet> {
        self.sets.remove(&color)
    }

    /// Merge a set taken from another board into this one.
    ///
    /// Returns buildings that did not fit (this board already had them).
    pub fn absorb_set(&mut self, mut incoming: PropertySet) -> Vec<Card> {
        let color = incoming.color;
        let buildings = incoming.strip_buildings();
        for card in incoming.properties {
            self.place(card, color);
        }

        let mut leftover = Vec::new();
        for building in buildings {
            if let Err(card) = self.add_building(building, color) {
                leftover.push(card);
            }
        }
        leftover
    }

    /// Strip buildings from incomplete sets and drop empty sets.
    ///
    /// Returns the stripped buildings.
    pub fn settle(&mut self) -> Vec<Card> {
        let mut stripped = Vec::new();
        for set in self.sets.values_mut() {
            if !set.is_complete() {
                stripped.extend(set.strip_buildings());
            }
        }
        self.sets.retain(|_, set| !set.is_empty());
        stripped
    }

    #[must_use]
    pub fn set(&self, color: Color) -> Option<&PropertySet> {
        self.sets.get(&color)
    }

    /// Sets in color order.
    pub fn sets(&self) -> impl Iterator<Item = &PropertySet> {
        self.sets.values()
    }

    /// The color a property card currently sits under.
    #[must_use]
    pub fn color_of(&self, id: InstanceId) -> Option<Color> {
        self.sets
            .values()
            .find(|set| set.properties.iter().any(|c| c.id == id))
            .map(|set| set.color)
    }

    /// Find a property or building by id.
    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<&Card> {
        self.all_cards().find(|c| c.id == id)
    }

    /// A property that sits in a complete set. Sly and Forced Deals cannot take it.
    #[must_use]
    pub fn is_protected(&self, id: InstanceId) -> bool {
        self.sets
            .values()
            .any(|set| set.is_complete() && set.properties.iter().any(|c| c.id == id))
    }

    /// Number of distinct colors with a complete set.
    #[must_use]
    pub fn complete_sets(&self) -> usize {
        self.sets.values().filter(|set| set.is_complete()).count()
    }

    /// Rent for a color, zero if the player has none of it.
    #[must_use]
    pub fn rent_for(&self, color: Color) -> u32 {
        self.sets.get(&color).map_or(0, PropertySet::rent)
    }

    /// Property cards only, with their colors.
    pub fn properties(&self) -> impl Iterator<Item = (&Card, Color)> {
        self.sets
            .values()
            .flat_map(|set| set.properties.iter().map(move |c| (c, set.color)))
    }

    /// Every card on the board, buildings included.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.sets.values().flat_map(PropertySet::cards)
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }
}
