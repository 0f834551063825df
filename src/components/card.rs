// src/components/card.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four suits of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

/// Card ranks, Ace low. `Ord` follows declaration order so `Ace < Two < ... < King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// Red or black, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    /// Lower-case plural name, e.g. `"hearts"`.
    pub fn label(self) -> &'static str {
        match self {
            Suit::Club => "clubs",
            Suit::Diamond => "diamonds",
            Suit::Heart => "hearts",
            Suit::Spade => "spades",
        }
    }
}

impl CardColor {
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Rank {
    /// Numeric value, Ace = 1 through King = 13.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Label used in text dumps and asset names: `"ace"`, `"2"`..`"10"`, `"jack"`...
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    /// True when `self` sits exactly one step below `other` (a 9 below a 10).
    pub fn is_one_below(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }

    /// True when `self` sits exactly one step above `other`.
    pub fn is_one_above(self, other: Rank) -> bool {
        other.is_one_below(self)
    }
}

/// A single playing card.
///
/// Suit and rank never change once the card is built; only the face
/// orientation moves as the card travels between piles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// A new face-down card.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// Builder-style orientation setter, handy when laying out fixtures.
    pub fn with_face_up(mut self, face_up: bool) -> Self {
        self.is_face_up = face_up;
        self
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Suit and rank together; two cards with the same identity are the same card.
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.is_face_up = face_up;
    }

    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// Image name the presentation layer looks up, e.g. `"queen_of_hearts"`.
    /// Face-down cards all share `"card_back"`.
    pub fn asset_name(&self) -> String {
        if self.is_face_up {
            format!("{}_of_{}", self.rank.label(), self.suit.label())
        } else {
            "card_back".to_string()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up {
            write!(f, "{} of {}", self.rank.label(), self.suit.label())
        } else {
            f.write_str("Face Down")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_face_down() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.rank(), Rank::Ace);
        assert!(!card.is_face_up());
    }

    #[test]
    fn flip_and_set_face_up() {
        let mut card = Card::new(Suit::Heart, Rank::Seven);
        card.flip();
        assert!(card.is_face_up());
        card.flip();
        assert!(!card.is_face_up());
        card.set_face_up(true);
        card.set_face_up(true);
        assert!(card.is_face_up());
    }

    #[test]
    fn color_follows_suit() {
        assert_eq!(Card::new(Suit::Heart, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Diamond, Rank::Two).color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Club, Rank::Two).color(), CardColor::Black);
        assert_eq!(Card::new(Suit::Spade, Rank::Two).color(), CardColor::Black);
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::Nine.is_one_below(Rank::Ten));
        assert!(!Rank::Nine.is_one_below(Rank::Jack));
        assert!(Rank::Two.is_one_above(Rank::Ace));
        assert!(!Rank::King.is_one_below(Rank::Ace));
        assert_eq!(ALL_RANKS.len(), 13);
        assert!(ALL_RANKS.windows(2).all(|w| w[0].is_one_below(w[1])));
    }

    #[test]
    fn display_and_asset_name() {
        let card = Card::new(Suit::Heart, Rank::Queen);
        assert_eq!(card.to_string(), "Face Down");
        assert_eq!(card.asset_name(), "card_back");

        let card = card.with_face_up(true);
        assert_eq!(card.to_string(), "queen of hearts");
        assert_eq!(card.asset_name(), "queen_of_hearts");
        assert_eq!(Card::new(Suit::Club, Rank::Ten).with_face_up(true).asset_name(), "10_of_clubs");
    }
}
