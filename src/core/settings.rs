//! Game configuration: player count, pair count, player names.
//!
//! Settings are created once by a setup flow, validated, and stay immutable
//! for the lifetime of the game they start. Validation failures name the
//! offending field so a form can surface them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Inclusive bounds on the number of local players.
pub const MIN_PLAYERS: usize = 1;
/// Inclusive bounds on the number of local players.
pub const MAX_PLAYERS: usize = 4;

/// The selectable pair counts. The upper bound is tied to the size of the
/// standard icon catalog.
pub const PAIR_OPTIONS: [usize; 10] = [4, 6, 8, 10, 12, 15, 18, 21, 24, 25];

/// A rejected game setup. Nothing is mutated when validation fails.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid player count {0}: must be between 1 and 4")]
    InvalidPlayerCount(usize),

    #[error("invalid pair count {0}: not a selectable option")]
    InvalidPairCount(usize),

    #[error("{0} has an empty name")]
    EmptyPlayerName(PlayerId),
}

/// Immutable settings for one game.
///
/// ## Example
///
/// ```
/// use matchup_memory::core::GameSettings;
///
/// let settings = GameSettings::new(2, 8, ["Ann", "Ben"]);
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.num_cards(), 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Number of players, in `[MIN_PLAYERS, MAX_PLAYERS]`.
    pub num_players: usize,

    /// Number of icon pairs, one of `PAIR_OPTIONS`.
    pub num_pairs: usize,

    /// Ordered player names. Slots beyond `num_players` are ignored;
    /// missing slots fall back to `Player N`.
    pub player_names: Vec<String>,
}

impl GameSettings {
    /// Create settings. Call [`GameSettings::validate`] before use.
    #[must_use]
    pub fn new<I, S>(num_players: usize, num_pairs: usize, player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            num_players,
            num_pairs,
            player_names: player_names.into_iter().map(Into::into).collect(),
        }
    }

    /// The default display name for a player slot.
    #[must_use]
    pub fn default_name(id: PlayerId) -> String {
        format!("Player {}", id.0)
    }

    /// Total cards the deck will hold.
    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.num_pairs * 2
    }

    /// Check every field, reporting the first violation.
    ///
    /// A name slot that exists but is empty after trimming is an error;
    /// a missing slot is not, since it gets a default name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ValidationError::InvalidPlayerCount(self.num_players));
        }

        if !PAIR_OPTIONS.contains(&self.num_pairs) {
            return Err(ValidationError::InvalidPairCount(self.num_pairs));
        }

        for (i, name) in self.player_names.iter().take(self.num_players).enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyPlayerName(PlayerId::new(i as u8 + 1)));
            }
        }

        Ok(())
    }

    /// The final name list: trimmed, truncated to `num_players`, with
    /// `Player N` defaults filling any missing slots.
    #[must_use]
    pub fn normalized_names(&self) -> Vec<String> {
        PlayerId::all(self.num_players)
            .map(|id| {
                self.player_names
                    .get(id.index())
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| Self::default_name(id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings = GameSettings::new(2, 8, ["Ann", "Ben"]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_all_pair_options_valid() {
        for pairs in PAIR_OPTIONS {
            let settings = GameSettings::new(1, pairs, ["Solo"]);
            assert!(settings.validate().is_ok(), "pairs={pairs} should be valid");
        }
    }

    #[test]
    fn test_invalid_player_count() {
        let settings = GameSettings::new(5, 8, ["A", "B", "C", "D", "E"]);
        assert_eq!(
            settings.validate(),
            Err(ValidationError::InvalidPlayerCount(5))
        );

        let settings = GameSettings::new(0, 8, Vec::<String>::new());
        assert_eq!(
            settings.validate(),
            Err(ValidationError::InvalidPlayerCount(0))
        );
    }

    #[test]
    fn test_invalid_pair_count() {
        let settings = GameSettings::new(2, 7, ["Ann", "Ben"]);
        assert_eq!(settings.validate(), Err(ValidationError::InvalidPairCount(7)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let settings = GameSettings::new(2, 8, ["Ann", "   "]);
        assert_eq!(
            settings.validate(),
            Err(ValidationError::EmptyPlayerName(PlayerId::new(2)))
        );
    }

    #[test]
    fn test_extra_names_ignored() {
        // The empty third slot is beyond num_players and must not fail
        let settings = GameSettings::new(2, 8, ["Ann", "Ben", ""]);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.normalized_names(), vec!["Ann", "Ben"]);
    }

    #[test]
    fn test_missing_names_get_defaults() {
        let settings = GameSettings::new(3, 8, ["Ann"]);
        assert!(settings.validate().is_ok());
        assert_eq!(
            settings.normalized_names(),
            vec!["Ann", "Player 2", "Player 3"]
        );
    }

    #[test]
    fn test_names_trimmed() {
        let settings = GameSettings::new(2, 8, ["  Ann ", "Ben"]);
        assert_eq!(settings.normalized_names(), vec!["Ann", "Ben"]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidPlayerCount(5).to_string(),
            "invalid player count 5: must be between 1 and 4"
        );
        assert_eq!(
            ValidationError::EmptyPlayerName(PlayerId::new(2)).to_string(),
            "Player 2 has an empty name"
        );
    }

    #[test]
    fn test_settings_serialization() {
        let settings = GameSettings::new(2, 8, ["Ann", "Ben"]);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
