//! Card system: colors, card kinds, instances, and the deck catalog.
//!
//! ## Key Types
//!
//! - `Color` / `ColorChoice`: property groups, set sizes, rent tables
//! - `CardKind` / `ActionKind`: what a card is
//! - `Card`: one physical card (kind, face value, unique `InstanceId`)
//! - `CardCatalog`: deck composition, standard or custom

pub mod catalog;
pub mod color;
pub mod definition;

pub use catalog::{CardCatalog, CardDefinition};
pub use color::{Color, ColorChoice};
pub use definition::{ActionKind, Card, CardKind};
