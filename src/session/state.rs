//! The per-game aggregate.
//!
//! `GameSession` owns everything one game needs: the deck, the players,
//! whose turn it is, the pending selection, and the event queue. It is
//! created fresh by the session controller and replaced wholesale on
//! restart.
//!
//! Card state is mutated only by the match engine; this module exposes
//! read-only views publicly and crate-private mutators for the engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardId};
use crate::core::{PlayerId, PlayerRoster};
use crate::engine::{EventQueue, GameEvent, PendingFlipBack};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Cards remain unmatched.
    InProgress,
    /// Every pair is matched; winners are final.
    Finished,
}

/// One game in flight: deck, players, turn, selection, status, events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    deck: Vec<Card>,
    /// Card id -> deck slot, for O(1) lookup on click.
    card_index: FxHashMap<CardId, usize>,
    players: PlayerRoster,
    current_player: PlayerId,
    /// Face-up-but-unresolved cards this turn: 0, 1, or 2.
    selection: SmallVec<[CardId; 2]>,
    /// The scheduled mismatch reset, if one is in flight.
    pending: Option<PendingFlipBack>,
    status: GameStatus,
    events: EventQueue,
}

impl GameSession {
    /// Start a session over a generated deck. The first player opens.
    #[must_use]
    pub fn new(deck: Vec<Card>, players: PlayerRoster) -> Self {
        let card_index = deck
            .iter()
            .enumerate()
            .map(|(slot, card)| (card.id, slot))
            .collect();

        let mut events = EventQueue::new();
        let first_player = PlayerId::first();
        events.push(GameEvent::GameStarted { first_player });

        Self {
            deck,
            card_index,
            players,
            current_player: first_player,
            selection: SmallVec::new(),
            pending: None,
            status: GameStatus::InProgress,
            events,
        }
    }

    // === Read-only views ===

    /// The full deck in board order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.card_index.get(&id).map(|&slot| &self.deck[slot])
    }

    /// The players in id order.
    #[must_use]
    pub fn players(&self) -> &PlayerRoster {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The face-up-but-unresolved cards this turn.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// The scheduled mismatch reset, if any.
    #[must_use]
    pub fn pending_flip_back(&self) -> Option<&PendingFlipBack> {
        self.pending.as_ref()
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once every pair is matched.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Total pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    /// Pairs confirmed so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.deck.iter().filter(|c| c.is_matched).count() / 2
    }

    /// The winning players, once the game is finished.
    ///
    /// Non-empty: a singleton for a unique winner, larger on ties.
    #[must_use]
    pub fn winners(&self) -> Option<Vec<PlayerId>> {
        match self.status {
            GameStatus::Finished => Some(self.players.leaders()),
            GameStatus::InProgress => None,
        }
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Peek at queued events without draining.
    #[must_use]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    // === Engine-facing mutators ===

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let slot = *self.card_index.get(&id)?;
        Some(&mut self.deck[slot])
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn push_selection(&mut self, id: CardId) {
        debug_assert!(self.selection.len() < 2, "selection never exceeds 2 cards");
        self.selection.push(id);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub(crate) fn set_pending(&mut self, pending: PendingFlipBack) {
        self.pending = Some(pending);
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingFlipBack> {
        self.pending.take()
    }

    /// Award the current player one point and announce the new score.
    pub(crate) fn score_current(&mut self) -> u32 {
        let player = self.current_player;
        self.players[player].add_point();
        let score = self.players[player].score;
        self.events.push(GameEvent::ScoreChanged { player, score });
        score
    }

    /// Pass the turn round-robin and announce the new current player.
    pub(crate) fn advance_turn(&mut self) -> PlayerId {
        self.current_player = self.current_player.next(self.players.len());
        self.events.push(GameEvent::TurnChanged {
            player: self.current_player,
        });
        self.current_player
    }

    /// Finish the session if every card is matched.
    ///
    /// Returns true when this call performed the transition.
    pub(crate) fn check_finished(&mut self) -> bool {
        if self.status == GameStatus::Finished {
            return false;
        }
        if !self.deck.iter().all(|c| c.is_matched) {
            return false;
        }

        self.status = GameStatus::Finished;
        let winners = self.players.leaders();
        debug!(?winners, "game finished");
        self.events.push(GameEvent::GameFinished { winners });
        true
    }
}
