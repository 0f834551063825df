// src/logic/deck.rs

use std::collections::HashSet;

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// Builds the 52-card deck, suit by suit, every card face-down.
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(suit, rank))
        .collect()
}

/// Shuffles in place with a Fisher-Yates pass driven by `rng`, so every
/// permutation is equally likely for a uniform source.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// True if `cards` holds each of the 52 suit/rank pairs exactly once.
pub fn is_complete_deck<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in cards {
        if !seen.insert(card.identity()) {
            return false;
        }
    }
    seen.len() == DECK_SIZE
}
