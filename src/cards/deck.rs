//! Deck generation: a randomized, fully-paired board.
//!
//! Two independent unbiased shuffles: one over the catalog to pick which
//! icons appear, one over the assembled cards so paired cards are not
//! adjacent by construction. Pure given a seeded [`GameRng`].

use tracing::warn;

use crate::core::GameRng;

use super::card::{Card, CardId, PairId};
use super::catalog::IconCatalog;

/// Generate a shuffled deck of `num_pairs` pairs.
///
/// Icons are drawn from the catalog without replacement. When `num_pairs`
/// exceeds the catalog, the remaining pairs receive the catalog's fallback
/// icon but keep distinct `pair_id`s, and a warning-level diagnostic fires;
/// game start is never aborted over it.
///
/// Guarantees: output length is exactly `2 * num_pairs`, every `pair_id`
/// appears exactly twice, and card ids are unique.
///
/// ## Example
///
/// ```
/// use matchup_memory::cards::{generate_deck, IconCatalog};
/// use matchup_memory::core::GameRng;
///
/// let deck = generate_deck(8, &IconCatalog::standard(), &mut GameRng::new(42));
/// assert_eq!(deck.len(), 16);
/// ```
#[must_use]
pub fn generate_deck(num_pairs: usize, catalog: &IconCatalog, rng: &mut GameRng) -> Vec<Card> {
    assert!(num_pairs >= 1, "Must have at least 1 pair");

    if num_pairs > catalog.len() {
        warn!(
            requested = num_pairs,
            available = catalog.len(),
            "pair count exceeds icon catalog, substituting fallback icon"
        );
    }

    // Unbiased draw: permute catalog positions, keep the first num_pairs.
    let mut positions: Vec<usize> = (0..catalog.len()).collect();
    rng.shuffle(&mut positions);
    positions.truncate(num_pairs);

    let mut cards = Vec::with_capacity(num_pairs * 2);
    for pair_index in 0..num_pairs {
        let icon = positions
            .get(pair_index)
            .and_then(|&p| catalog.get(p))
            .cloned()
            .unwrap_or_else(|| catalog.fallback());

        let pair_id = PairId::new(pair_index as u32);
        cards.push(Card::new(
            CardId::new(pair_index as u32 * 2),
            pair_id,
            icon.clone(),
        ));
        cards.push(Card::new(
            CardId::new(pair_index as u32 * 2 + 1),
            pair_id,
            icon,
        ));
    }

    rng.shuffle(&mut cards);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pair_counts(deck: &[Card]) -> HashMap<PairId, usize> {
        let mut counts = HashMap::new();
        for card in deck {
            *counts.entry(card.pair_id).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_deck_size_and_pairing() {
        for num_pairs in [1, 4, 8, 25] {
            let deck = generate_deck(num_pairs, &IconCatalog::standard(), &mut GameRng::new(42));

            assert_eq!(deck.len(), num_pairs * 2);

            let counts = pair_counts(&deck);
            assert_eq!(counts.len(), num_pairs);
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn test_cards_start_face_down() {
        let deck = generate_deck(8, &IconCatalog::standard(), &mut GameRng::new(42));
        assert!(deck.iter().all(|c| !c.is_flipped && !c.is_matched));
    }

    #[test]
    fn test_card_ids_unique() {
        let deck = generate_deck(25, &IconCatalog::standard(), &mut GameRng::new(42));
        let mut ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_pair_shares_icon() {
        let deck = generate_deck(10, &IconCatalog::standard(), &mut GameRng::new(42));

        let mut icons_by_pair: HashMap<PairId, Vec<&str>> = HashMap::new();
        for card in &deck {
            icons_by_pair
                .entry(card.pair_id)
                .or_default()
                .push(card.icon.name());
        }

        for icons in icons_by_pair.values() {
            assert_eq!(icons.len(), 2);
            assert_eq!(icons[0], icons[1]);
        }
    }

    #[test]
    fn test_distinct_pairs_distinct_icons() {
        let deck = generate_deck(25, &IconCatalog::standard(), &mut GameRng::new(42));

        let mut icons: Vec<&str> = deck
            .iter()
            .filter(|c| c.id.raw() % 2 == 0)
            .map(|c| c.icon.name())
            .collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), 25);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let deck1 = generate_deck(8, &IconCatalog::standard(), &mut GameRng::new(7));
        let deck2 = generate_deck(8, &IconCatalog::standard(), &mut GameRng::new(7));
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let deck1 = generate_deck(25, &IconCatalog::standard(), &mut GameRng::new(1));
        let deck2 = generate_deck(25, &IconCatalog::standard(), &mut GameRng::new(2));
        assert_ne!(deck1, deck2);
    }

    #[test]
    fn test_catalog_exhaustion_uses_fallback() {
        let catalog = IconCatalog::from_names(["cat", "dog", "owl"]);
        let deck = generate_deck(6, &catalog, &mut GameRng::new(42));

        // Invariant holds even past the catalog
        assert_eq!(deck.len(), 12);
        let counts = pair_counts(&deck);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));

        // Three pairs wear the fallback face
        let fallback = catalog.fallback();
        let fallback_cards = deck.iter().filter(|c| c.icon == fallback).count();
        assert_eq!(fallback_cards, 6);
    }

    #[test]
    fn test_catalog_exhaustion_preserves_real_icons() {
        let catalog = IconCatalog::from_names(["cat", "dog"]);
        let deck = generate_deck(4, &catalog, &mut GameRng::new(42));

        for name in ["cat", "dog"] {
            let count = deck.iter().filter(|c| c.icon.name() == name).count();
            assert_eq!(count, 2, "icon {name} should appear on exactly one pair");
        }
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 pair")]
    fn test_zero_pairs_rejected() {
        let _ = generate_deck(0, &IconCatalog::standard(), &mut GameRng::new(42));
    }
}
