//! Helpers shared by the tableau and foundation rules.

use crate::components::card::Card;

/// True if the two cards are of opposite colors.
pub fn colors_differ(a: &Card, b: &Card) -> bool {
    a.color() != b.color()
}

/// True if `card` may sit directly on `below` inside a tableau column:
/// opposite color, exactly one rank lower.
pub fn stacks_on(card: &Card, below: &Card) -> bool {
    colors_differ(card, below) && card.rank().is_one_below(below.rank())
}
