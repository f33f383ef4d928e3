//! Core engine types: players, settings, RNG.
//!
//! The fundamental building blocks shared by deck generation, the match
//! engine, and the session controller.

pub mod player;
pub mod rng;
pub mod settings;

pub use player::{Player, PlayerId, PlayerRoster};
pub use rng::GameRng;
pub use settings::{GameSettings, ValidationError, MAX_PLAYERS, MIN_PLAYERS, PAIR_OPTIONS};
