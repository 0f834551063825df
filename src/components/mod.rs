// src/components/mod.rs

pub mod card;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use stack::{Stack, StackType};
