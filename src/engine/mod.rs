//! Match engine: events, the deferred mismatch reset, and the turn/match
//! state machine.
//!
//! ## Key Types
//!
//! - [`GameEvent`] / [`EventQueue`]: engine output for presentation layers
//! - [`PendingFlipBack`]: the schedulable mismatch reset
//! - [`MatchEngine`]: flip selection, pair evaluation, scoring, turn
//!   sequencing, win detection

pub mod event;
pub mod machine;
pub mod pending;

pub use event::{EventQueue, GameEvent};
pub use machine::{IgnoreReason, MatchEngine, SelectOutcome, SelectionPhase, FLIP_BACK_DELAY};
pub use pending::PendingFlipBack;
