// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// Names every place a card can sit on the table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// Face-down draw pile.
    Stock,
    /// Up to three face-up cards drawn from the stock.
    Waste,
    /// One of the seven playing columns (0-6).
    Tableau(u8),
    /// One of the four build piles (0-3).
    Foundation(u8),
}

/// An ordered pile of cards. Index 0 is the bottom, the last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    cards: Vec<Card>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Read-only view, bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards from `position` through the top, bottom first. Does not mutate.
    pub fn run_from(&self, position: usize) -> Option<&[Card]> {
        if position < self.cards.len() {
            Some(&self.cards[position..])
        } else {
            None
        }
    }

    /// Removes and returns the cards from `position` through the top, keeping their order.
    /// Returns `None` (and leaves the pile alone) if `position` is past the top card.
    pub fn split_off(&mut self, position: usize) -> Option<Vec<Card>> {
        if position < self.cards.len() {
            Some(self.cards.split_off(position))
        } else {
            None
        }
    }

    /// Places `cards` on top, first element lowest.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Empties the pile, returning its cards bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Turns the top card face-up if it is face-down. Returns true if a card was turned.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up() => {
                card.flip();
                true
            }
            _ => false,
        }
    }
}

impl From<Vec<Card>> for Stack {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
