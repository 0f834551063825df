// src/protocol.rs
//! Read-only data handed to the presentation layer, usually as JSON.
//!
//! The stock is reported as a count and face-down cards carry no suit or
//! rank, so nothing here leaks what the player cannot see.

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;
use crate::config::rules::{FOUNDATION_PILES, TABLEAU_PILES};
use crate::engine::GameEngine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Option<Suit>,
    pub rank: Option<Rank>,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        if card.is_face_up() {
            Self { suit: Some(card.suit()), rank: Some(card.rank()), is_face_up: true }
        } else {
            Self { suit: None, rank: None, is_face_up: false }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileData {
    pub stack_type: StackType,
    /// Bottom to top.
    pub cards: Vec<CardData>,
}

impl PileData {
    fn new(stack_type: StackType, cards: &[Card]) -> Self {
        Self { stack_type, cards: cards.iter().map(CardData::from).collect() }
    }
}

/// Everything the presentation layer needs to draw the table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub stock_count: usize,
    pub discard_count: usize,
    pub waste: PileData,
    pub tableau: Vec<PileData>,
    pub foundations: Vec<PileData>,
}

impl GameStateData {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let tableau = (0..TABLEAU_PILES)
            .filter_map(|i| {
                let cards = engine.tableau_pile(i)?;
                Some(PileData::new(StackType::Tableau(i as u8), cards))
            })
            .collect();
        let foundations = (0..FOUNDATION_PILES)
            .filter_map(|i| {
                let cards = engine.foundation_pile(i)?;
                Some(PileData::new(StackType::Foundation(i as u8), cards))
            })
            .collect();

        Self {
            stock_count: engine.stock_len(),
            discard_count: engine.discard_len(),
            waste: PileData::new(StackType::Waste, engine.waste()),
            tableau,
            foundations,
        }
    }
}
