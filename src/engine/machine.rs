//! The turn/match state machine.
//!
//! Selection moves `Idle` -> `OneSelected` -> `Checking` -> `Idle`. The
//! second selection is evaluated synchronously: a match scores the current
//! player and keeps their turn; a mismatch schedules a deferred flip back
//! after which the turn passes round-robin. Stale interactions - clicks on
//! face-up cards, clicks during the pause, clicks after the game ended -
//! are ignored, not errors: they are timing races with presentation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardId, PairId};
use crate::core::PlayerId;
use crate::session::GameSession;

use super::event::GameEvent;
use super::pending::PendingFlipBack;

/// Default visual pause before mismatched cards flip back.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(1200);

/// Where the engine is within one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// No cards selected.
    Idle,
    /// One card face-up, waiting for its candidate partner.
    OneSelected,
    /// Two cards evaluated as a mismatch, flip back pending.
    Checking,
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No session is active.
    NoActiveGame,
    /// The game already finished.
    GameFinished,
    /// A mismatch reset is pending; no new selections until it resolves.
    Evaluating,
    /// The card id does not exist in this deck.
    UnknownCard,
    /// The card is already face-up (including re-clicking the selected
    /// card and clicking matched cards).
    AlreadyFaceUp,
}

/// Result of a [`MatchEngine::select_card`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing happened; see the reason.
    Ignored(IgnoreReason),
    /// First card of the turn flipped face-up.
    Flipped,
    /// Second card completed a pair. The player keeps the turn.
    Matched { player: PlayerId, pair: PairId },
    /// Second card did not match; a flip back is now pending.
    Mismatched,
}

/// The match engine: flip selection, pair evaluation, scoring, turn
/// sequencing, and win detection over a [`GameSession`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEngine {
    flip_back_delay: Duration,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            flip_back_delay: FLIP_BACK_DELAY,
        }
    }
}

impl MatchEngine {
    /// Create an engine with the default mismatch pause.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the mismatch pause.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// The configured mismatch pause.
    #[must_use]
    pub fn flip_back_delay(&self) -> Duration {
        self.flip_back_delay
    }

    /// Where the engine is within the current turn.
    #[must_use]
    pub fn phase(&self, session: &GameSession) -> SelectionPhase {
        if session.pending_flip_back().is_some() {
            SelectionPhase::Checking
        } else if session.selection().is_empty() {
            SelectionPhase::Idle
        } else {
            SelectionPhase::OneSelected
        }
    }

    /// Select a card for the current player.
    ///
    /// Flips the card face-up; on the second selection the pair is
    /// evaluated synchronously. Stale or impossible selections return
    /// [`SelectOutcome::Ignored`] without touching any state.
    pub fn select_card(&self, session: &mut GameSession, card_id: CardId) -> SelectOutcome {
        if session.is_finished() {
            return SelectOutcome::Ignored(IgnoreReason::GameFinished);
        }
        if session.pending_flip_back().is_some() {
            return SelectOutcome::Ignored(IgnoreReason::Evaluating);
        }

        match session.card(card_id) {
            None => return SelectOutcome::Ignored(IgnoreReason::UnknownCard),
            Some(card) if !card.is_selectable() => {
                return SelectOutcome::Ignored(IgnoreReason::AlreadyFaceUp);
            }
            Some(_) => {}
        }

        session
            .card_mut(card_id)
            .expect("card existence checked above")
            .flip_up();
        session.push_selection(card_id);

        if let &[first, second] = session.selection() {
            self.evaluate(session, first, second)
        } else {
            SelectOutcome::Flipped
        }
    }

    /// Evaluate the two selected cards.
    fn evaluate(&self, session: &mut GameSession, first: CardId, second: CardId) -> SelectOutcome {
        let first_pair = session.card(first).map(|c| c.pair_id);
        let second_pair = session.card(second).map(|c| c.pair_id);

        match (first_pair, second_pair) {
            (Some(a), Some(b)) if a == b => self.resolve_match(session, first, second, a),
            _ => self.resolve_mismatch(session, first, second),
        }
    }

    fn resolve_match(
        &self,
        session: &mut GameSession,
        first: CardId,
        second: CardId,
        pair: PairId,
    ) -> SelectOutcome {
        for id in [first, second] {
            session
                .card_mut(id)
                .expect("selected cards exist")
                .set_matched();
        }

        let player = session.current_player();
        let score = session.score_current();
        debug!(%player, %pair, score, "match found");

        let name = session.players()[player].name.clone();
        session.push_event(GameEvent::MatchResult {
            player,
            matched: true,
            description: format!("{name} scored a point!"),
        });

        session.clear_selection();
        session.check_finished();

        SelectOutcome::Matched { player, pair }
    }

    fn resolve_mismatch(
        &self,
        session: &mut GameSession,
        first: CardId,
        second: CardId,
    ) -> SelectOutcome {
        let player = session.current_player();
        debug!(%player, "no match, scheduling flip back");

        session.push_event(GameEvent::MatchResult {
            player,
            matched: false,
            description: "No match! Try again.".to_string(),
        });
        session.set_pending(PendingFlipBack::new([first, second], self.flip_back_delay));

        SelectOutcome::Mismatched
    }

    /// Execute the pending mismatch reset.
    ///
    /// Called by the scheduler once the pause elapses. Both cards return
    /// face-down, the selection clears, and the turn passes round-robin.
    /// Returns the new current player, or `None` when no reset was pending
    /// (the reset runs exactly once).
    pub fn resolve_flip_back(&self, session: &mut GameSession) -> Option<PlayerId> {
        let pending = session.take_pending()?;

        for id in pending.cards() {
            if let Some(card) = session.card_mut(id) {
                card.flip_down();
            }
        }
        session.clear_selection();

        let next = session.advance_turn();
        session.check_finished();
        Some(next)
    }
}
