//! Rules engine trait.
//!
//! `RulesEngine` is the seam between game state and the rules that move it:
//! - Who acts next and what they may do
//! - How actions modify state
//! - Win and draw conditions
//!
//! `game::MonopolyDeal` implements it; policies and playouts only see the
//! trait.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
