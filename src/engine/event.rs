//! Engine output events.
//!
//! Events are how the engine talks to presentation collaborators: score
//! widgets, turn banners, toast notifications, the win dialog. The engine
//! queues them as play unfolds; a single-threaded host drains the queue
//! after each call and re-reads whatever state it needs.
//!
//! Draining is this engine's stand-in for a subscription mechanism -
//! ordering is preserved and no interior mutability is required.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something a presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began; it is `first_player`'s turn.
    GameStarted { first_player: PlayerId },

    /// A player's score changed to `score`.
    ScoreChanged { player: PlayerId, score: u32 },

    /// A pair evaluation finished. `description` is display-ready.
    MatchResult {
        player: PlayerId,
        matched: bool,
        description: String,
    },

    /// The turn passed to `player`.
    TurnChanged { player: PlayerId },

    /// All pairs are matched; `winners` hold the top score (ties possible).
    GameFinished { winners: Vec<PlayerId> },
}

/// FIFO queue of pending engine events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of undrained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at queued events without draining them.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
