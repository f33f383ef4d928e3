//! The deferred mismatch reset.
//!
//! A mismatch leaves both cards face-up for a visual pause before they flip
//! back and the turn passes. The engine never sleeps: it stores a
//! [`PendingFlipBack`] and a scheduler layer calls
//! [`MatchEngine::resolve_flip_back`](super::MatchEngine::resolve_flip_back)
//! once the delay elapses - or never, if the session is replaced first.
//! This makes the reset run exactly once per mismatch and lets a restart
//! cancel it outright instead of racing a stale timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A scheduled "flip both cards back and pass the turn" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlipBack {
    cards: [CardId; 2],
    delay: Duration,
}

impl PendingFlipBack {
    /// Create a pending reset for the two mismatched cards.
    #[must_use]
    pub fn new(cards: [CardId; 2], delay: Duration) -> Self {
        Self { cards, delay }
    }

    /// The two cards awaiting their flip back.
    #[must_use]
    pub fn cards(&self) -> [CardId; 2] {
        self.cards
    }

    /// How long the scheduler should wait before resolving.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
