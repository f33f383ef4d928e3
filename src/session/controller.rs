//! Session orchestration: one controller, one game at a time.
//!
//! The controller validates settings, builds the deck, and hands
//! interactions to the match engine. `restart` drops the session wholesale,
//! which also cancels any pending mismatch reset. The last-used player
//! setup is remembered so the next setup form can be prepopulated.

use tracing::debug;

use crate::cards::{generate_deck, CardId, IconCatalog};
use crate::core::{GameRng, GameSettings, PlayerId, PlayerRoster, ValidationError};
use crate::engine::{GameEvent, IgnoreReason, MatchEngine, PendingFlipBack, SelectOutcome};

use super::state::GameSession;

/// Orchestrates full games from validated settings.
pub struct SessionController {
    engine: MatchEngine,
    rng: GameRng,
    catalog: IconCatalog,
    settings: Option<GameSettings>,
    session: Option<GameSession>,
    last_num_players: usize,
    last_player_names: Vec<String>,
}

impl SessionController {
    /// Create a controller seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a controller with a fixed seed (deterministic decks).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            engine: MatchEngine::new(),
            rng,
            catalog: IconCatalog::standard(),
            settings: None,
            session: None,
            last_num_players: 1,
            last_player_names: vec![GameSettings::default_name(PlayerId::first())],
        }
    }

    /// Swap in a custom icon catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: IconCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Swap in a configured match engine (e.g. a shorter mismatch pause).
    #[must_use]
    pub fn with_engine(mut self, engine: MatchEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Start a game from the given settings.
    ///
    /// Fails with a [`ValidationError`] naming the invalid field; nothing
    /// is mutated on failure. On success the previous session (if any) is
    /// replaced and the setup values are remembered for the next form.
    pub fn start_game(&mut self, settings: GameSettings) -> Result<&GameSession, ValidationError> {
        settings.validate()?;

        let names = settings.normalized_names();
        let deck = generate_deck(settings.num_pairs, &self.catalog, &mut self.rng);

        debug!(
            num_players = settings.num_players,
            num_pairs = settings.num_pairs,
            seed = self.rng.seed(),
            "starting game"
        );

        self.last_num_players = settings.num_players;
        self.last_player_names = names.clone();
        self.session = Some(GameSession::new(deck, PlayerRoster::from_names(names)));
        self.settings = Some(settings);

        Ok(self.session.as_ref().expect("session just created"))
    }

    /// Discard the current game entirely.
    ///
    /// Any pending mismatch reset dies with the session, so a stale timer
    /// can never touch the next game. Settings are not mutated.
    pub fn restart(&mut self) {
        if self.session.take().is_some() {
            debug!("session discarded");
        }
    }

    /// The remembered `(num_players, player_names)` from the last started
    /// game, for prepopulating the next setup form.
    #[must_use]
    pub fn setup_defaults(&self) -> (usize, &[String]) {
        (self.last_num_players, &self.last_player_names)
    }

    /// Select a card in the active session.
    ///
    /// Without an active session this is an ignored no-op, like every
    /// other stale interaction.
    pub fn select_card(&mut self, card_id: CardId) -> SelectOutcome {
        match self.session.as_mut() {
            Some(session) => self.engine.select_card(session, card_id),
            None => SelectOutcome::Ignored(IgnoreReason::NoActiveGame),
        }
    }

    /// The pending mismatch reset the scheduler should wait on, if any.
    #[must_use]
    pub fn pending_flip_back(&self) -> Option<&PendingFlipBack> {
        self.session.as_ref()?.pending_flip_back()
    }

    /// Execute the pending mismatch reset.
    ///
    /// Returns the new current player, or `None` when nothing was pending.
    pub fn resolve_flip_back(&mut self) -> Option<PlayerId> {
        let session = self.session.as_mut()?;
        self.engine.resolve_flip_back(session)
    }

    /// Award the current player a point.
    ///
    /// The engine calls this itself on a match; it is exposed for
    /// collaborators that drive scoring externally.
    pub fn score_current_player(&mut self) -> Option<u32> {
        Some(self.session.as_mut()?.score_current())
    }

    /// Pass the turn to the next player in round-robin order.
    pub fn advance_turn(&mut self) -> Option<PlayerId> {
        Some(self.session.as_mut()?.advance_turn())
    }

    /// Read-only view of the active session.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The settings of the active (or last started) game.
    #[must_use]
    pub fn settings(&self) -> Option<&GameSettings> {
        self.settings.as_ref()
    }

    /// The configured match engine.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Take all queued events from the active session, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session
            .as_mut()
            .map(GameSession::drain_events)
            .unwrap_or_default()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
