// src/engine/mod.rs
//! The game engine: owns every pile of one game and applies player moves.
//!
//! A `GameEngine` is built already dealt. Each move either succeeds and
//! leaves the table in a new legal configuration, or fails and leaves it
//! exactly as it was. The caller re-reads the piles afterwards.

mod draw;
mod moves;


use std::error::Error;
use std::fmt;

use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::Card;
use crate::components::stack::Stack;
use crate::config::rules::{RuleConfig, DECK_SIZE, FOUNDATION_PILES, TABLEAU_PILES};
use crate::logic::deck::{create_standard_deck, is_complete_deck, shuffle_deck};
use crate::protocol::GameStateData;

pub use draw::DrawOutcome;

/// Why a caller-supplied deck could not be dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// The deck did not hold exactly 52 cards.
    WrongCardCount(usize),
    /// 52 cards, but some suit/rank pair appears twice.
    DuplicateCards,
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::WrongCardCount(count) => {
                write!(f, "expected {} cards in the deck, got {}", DECK_SIZE, count)
            }
            DealError::DuplicateCards => f.write_str("deck contains duplicate cards"),
        }
    }
}

impl Error for DealError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    stock: Stack,
    waste: Stack,
    /// Waste cards already shown, in the order they were drawn. Hidden from callers.
    discard: Stack,
    tableau: [Stack; TABLEAU_PILES],
    foundations: [Stack; FOUNDATION_PILES],
    config: RuleConfig,
}

impl GameEngine {
    /// Deals a new game shuffled with the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(&mut thread_rng())
    }

    /// Deals a reproducible game: the same seed always gives the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_seed_with_config(seed, RuleConfig::default())
    }

    pub fn from_seed_with_config(seed: u64, config: RuleConfig) -> Self {
        Self::with_rng_and_config(&mut StdRng::seed_from_u64(seed), config)
    }

    /// Deals a game shuffled by `rng`.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_rng_and_config(rng, RuleConfig::default())
    }

    pub fn with_rng_and_config<R: Rng + ?Sized>(rng: &mut R, config: RuleConfig) -> Self {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, rng);
        Self::deal(deck, config)
    }

    /// Deals `deck` without shuffling. The last card of `deck` is the top of
    /// the pack, so it lands alone on tableau pile 0.
    pub fn from_deck(deck: Vec<Card>) -> Result<Self, DealError> {
        Self::from_deck_with_config(deck, RuleConfig::default())
    }

    pub fn from_deck_with_config(mut deck: Vec<Card>, config: RuleConfig) -> Result<Self, DealError> {
        if deck.len() != DECK_SIZE {
            return Err(DealError::WrongCardCount(deck.len()));
        }
        if !is_complete_deck(&deck) {
            return Err(DealError::DuplicateCards);
        }
        deck.iter_mut().for_each(|card| card.set_face_up(false));
        Ok(Self::deal(deck, config))
    }

    /// Pile `i` takes `i + 1` cards from the top of the pack and shows its top card.
    fn deal(mut deck: Vec<Card>, config: RuleConfig) -> Self {
        let mut tableau: [Stack; TABLEAU_PILES] = Default::default();
        for (i, pile) in tableau.iter_mut().enumerate() {
            for _ in 0..=i {
                if let Some(card) = deck.pop() {
                    pile.push(card);
                }
            }
            pile.reveal_top();
        }

        info!("Dealt new game: {} cards left in stock", deck.len());
        Self {
            stock: Stack::from(deck),
            waste: Stack::new(),
            discard: Stack::new(),
            tableau,
            foundations: Default::default(),
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Number of face-down cards left to draw. The cards themselves stay hidden.
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Number of already-shown cards waiting to be recycled into the stock.
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Waste cards, bottom to top. The last one is the playable card.
    pub fn waste(&self) -> &[Card] {
        self.waste.cards()
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.top()
    }

    /// Tableau pile `index`, bottom to top, or `None` if there is no such pile.
    pub fn tableau_pile(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Stack::cards)
    }

    /// Foundation pile `index`, bottom to top, or `None` if there is no such pile.
    pub fn foundation_pile(&self, index: usize) -> Option<&[Card]> {
        self.foundations.get(index).map(Stack::cards)
    }

    /// Serialisable view of the table with hidden cards masked.
    pub fn snapshot(&self) -> GameStateData {
        GameStateData::from_engine(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// Every card on the table, stock and discard included.
    pub(crate) fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .cards()
            .iter()
            .chain(self.waste.cards())
            .chain(self.discard.cards())
            .chain(self.tableau.iter().flat_map(Stack::cards))
            .chain(self.foundations.iter().flat_map(Stack::cards))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-line dump of the whole table for debugging.
impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stock: {} cards", self.stock.len())?;

        write!(f, "Waste:")?;
        if self.waste.is_empty() {
            write!(f, " empty")?;
        }
        for card in self.waste.cards() {
            write!(f, " [{}]", card)?;
        }
        writeln!(f)?;

        writeln!(f, "Discard: {} cards", self.discard.len())?;

        for (i, pile) in self.tableau.iter().enumerate() {
            write!(f, "Tableau {}:", i + 1)?;
            if pile.is_empty() {
                write!(f, " empty")?;
            }
            for card in pile.cards() {
                write!(f, " [{}]", card)?;
            }
            writeln!(f)?;
        }

        for (i, pile) in self.foundations.iter().enumerate() {
            match pile.top() {
                Some(top) => writeln!(f, "Foundation {}: {} ({} cards)", i + 1, top, pile.len())?,
                None => writeln!(f, "Foundation {}: empty", i + 1)?,
            }
        }
        Ok(())
    }
}
