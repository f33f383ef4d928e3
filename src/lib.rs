//! # matchup-memory
//!
//! A turn-based memory-matching card game engine for 1-4 local players.
//!
//! Players flip pairs of face-down cards seeking icon matches. A match
//! scores a point and keeps the turn; a mismatch flips both cards back
//! after a visual pause and passes the turn round-robin. The game ends
//! when every pair is matched; the highest score wins, ties included.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, no input widgets, no assets. The
//!    boundary is an in-process API: settings and card clicks in, state
//!    views and events out.
//!
//! 2. **Stale interactions are not errors**: Double clicks, clicks during
//!    the mismatch pause, and clicks after the game ends are timing races
//!    with presentation. They resolve to ignored no-ops.
//!
//! 3. **No hidden timers**: The mismatch pause is an explicit schedulable
//!    value. A host scheduler resolves it after its delay, and a restart
//!    cancels it by dropping the session.
//!
//! 4. **Replayable randomness**: Deck generation is pure given a seed,
//!    and entropy-seeded games still record the seed they drew.
//!
//! ## Modules
//!
//! - `core`: Players, settings + validation, RNG
//! - `cards`: Icon catalog, cards, deck generation
//! - `engine`: Events, the match state machine, the deferred flip back
//! - `session`: The per-game aggregate and its controller
//!
//! ## Quick Start
//!
//! ```
//! use matchup_memory::core::GameSettings;
//! use matchup_memory::session::SessionController;
//!
//! let mut controller = SessionController::with_seed(42);
//! controller
//!     .start_game(GameSettings::new(2, 4, ["Ann", "Ben"]))
//!     .expect("settings are valid");
//!
//! let first_card = controller.session().unwrap().deck()[0].id;
//! controller.select_card(first_card);
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameSettings, Player, PlayerId, PlayerRoster, ValidationError, MAX_PLAYERS,
    MIN_PLAYERS, PAIR_OPTIONS,
};

pub use crate::cards::{generate_deck, Card, CardId, IconCatalog, IconKey, PairId};

pub use crate::engine::{
    EventQueue, GameEvent, IgnoreReason, MatchEngine, PendingFlipBack, SelectOutcome,
    SelectionPhase, FLIP_BACK_DELAY,
};

pub use crate::session::{GameSession, GameStatus, SessionController};
