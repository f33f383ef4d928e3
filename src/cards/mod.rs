//! Card system: icon catalog, deck cards, and deck generation.
//!
//! ## Key Types
//!
//! - `IconKey` / `IconCatalog`: symbolic card faces and the pool to draw from
//! - `CardId` / `PairId` / `Card`: one tile on the board
//! - `generate_deck`: randomized, fully-paired deck construction

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::{Card, CardId, PairId};
pub use catalog::{IconCatalog, IconKey};
pub use deck::generate_deck;
