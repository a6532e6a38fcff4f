//! Card locations.
//!
//! Every card in a game is in exactly one of these places:
//!
//! - `DrawPile`: shared, face down, top = end
//! - `DiscardPile`: shared, face up
//! - `Hand`: per player, hidden from the others
//! - `Bank`: per player, money pile
//! - `PropertyBoard`: per player, property sets with buildings

pub mod bank;
pub mod board;
pub mod hand;
pub mod pile;

pub use bank::Bank;
pub use board::{PropertyBoard, PropertySet, HOTEL_RENT, HOUSE_RENT};
pub use hand::Hand;
pub use pile::{DiscardPile, DrawPile};
