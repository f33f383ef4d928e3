//! Player identification and per-game player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Player ids are **1-indexed**: the first
//! player is `PlayerId(1)`, matching how players are presented ("Player 1").
//!
//! ## PlayerRoster
//!
//! The ordered set of players in one game, indexable by `PlayerId`,
//! with score queries for win evaluation.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, 1-indexed, supporting up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. Ids start at 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The first player, whose turn it is at game start.
    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    /// Get the 0-based roster index for this player.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// The next player in round-robin order for a game with
    /// `player_count` players.
    ///
    /// ```
    /// use matchup_memory::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(3), PlayerId::new(1));
    /// // Trivial round-robin of 1
    /// assert_eq!(PlayerId::new(1).next(1), PlayerId::new(1));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self((self.0 % player_count as u8) + 1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use matchup_memory::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player in a game: stable id, display name, running score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable 1-indexed identifier.
    pub id: PlayerId,

    /// Non-empty display name.
    pub name: String,

    /// Matched pairs found. Starts at 0, never decreases within a game.
    pub score: u32,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// Award one point for a confirmed match.
    pub fn add_point(&mut self) {
        self.score += 1;
    }
}

/// The ordered players of one game, indexable by `PlayerId`.
///
/// ## Example
///
/// ```
/// use matchup_memory::core::{PlayerId, PlayerRoster};
///
/// let roster = PlayerRoster::from_names(["Ann", "Ben"]);
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[PlayerId::new(1)].name, "Ann");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoster {
    players: Vec<Player>,
}

impl PlayerRoster {
    /// Create a roster from ordered names; ids are assigned 1..=N.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8 + 1), name))
            .collect();

        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");

        Self { players }
    }

    /// Get the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// A roster is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a mutable player by id.
    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Iterate over players in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// The highest score across the roster.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.players.iter().map(|p| p.score).max().unwrap_or(0)
    }

    /// Players holding the maximum score.
    ///
    /// Always non-empty: a singleton for a unique winner, larger on ties.
    #[must_use]
    pub fn leaders(&self) -> Vec<PlayerId> {
        let max = self.max_score();
        self.players
            .iter()
            .filter(|p| p.score == max)
            .map(|p| p.id)
            .collect()
    }
}

impl Index<PlayerId> for PlayerRoster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<PlayerId> for PlayerRoster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(PlayerId::first(), p1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(1));
        assert_eq!(players[3], PlayerId::new(4));
    }

    #[test]
    fn test_round_robin() {
        assert_eq!(PlayerId::new(1).next(4), PlayerId::new(2));
        assert_eq!(PlayerId::new(2).next(4), PlayerId::new(3));
        assert_eq!(PlayerId::new(4).next(4), PlayerId::new(1));
    }

    #[test]
    fn test_round_robin_single_player() {
        assert_eq!(PlayerId::new(1).next(1), PlayerId::new(1));
    }

    #[test]
    fn test_player_score() {
        let mut player = Player::new(PlayerId::new(1), "Ann");
        assert_eq!(player.score, 0);

        player.add_point();
        player.add_point();
        assert_eq!(player.score, 2);
    }

    #[test]
    fn test_roster_from_names() {
        let roster = PlayerRoster::from_names(["Ann", "Ben", "Cleo"]);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[PlayerId::new(1)].name, "Ann");
        assert_eq!(roster[PlayerId::new(3)].name, "Cleo");
        assert!(roster.iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_roster_mutation() {
        let mut roster = PlayerRoster::from_names(["Ann", "Ben"]);

        roster[PlayerId::new(2)].add_point();

        assert_eq!(roster[PlayerId::new(1)].score, 0);
        assert_eq!(roster[PlayerId::new(2)].score, 1);
    }

    #[test]
    fn test_leaders_singleton() {
        let mut roster = PlayerRoster::from_names(["Ann", "Ben"]);
        roster[PlayerId::new(1)].add_point();

        assert_eq!(roster.max_score(), 1);
        assert_eq!(roster.leaders(), vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_leaders_tie() {
        let mut roster = PlayerRoster::from_names(["Ann", "Ben", "Cleo"]);
        roster[PlayerId::new(1)].add_point();
        roster[PlayerId::new(3)].add_point();

        assert_eq!(roster.leaders(), vec![PlayerId::new(1), PlayerId::new(3)]);
    }

    #[test]
    fn test_leaders_all_zero() {
        let roster = PlayerRoster::from_names(["Ann", "Ben"]);
        // No pairs found yet: everyone is tied at 0
        assert_eq!(roster.leaders(), vec![PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = PlayerRoster::from_names(["Ann", "Ben"]);
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: PlayerRoster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_roster_empty() {
        let _ = PlayerRoster::from_names(Vec::<String>::new());
    }
}
