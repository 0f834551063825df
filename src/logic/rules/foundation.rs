//! Placement rules for the foundation piles.

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Stack;

/// Whether `card_to_move` may go onto a foundation whose top card is
/// `foundation_top` (`None` when empty).
///
/// Foundations are not tied to a suit until their Ace arrives; after that the
/// next card must share the suit and be exactly one rank higher.
pub fn can_move_to_foundation(card_to_move: &Card, foundation_top: Option<&Card>) -> bool {
    let result = match foundation_top {
        None => card_to_move.rank() == Rank::Ace,
        Some(top) => card_to_move.suit() == top.suit() && card_to_move.rank().is_one_above(top.rank()),
    };
    debug!(
        "[Foundation Rule] {:?} {:?} onto {:?}: {}",
        card_to_move.rank(),
        card_to_move.suit(),
        foundation_top.map(|top| (top.rank(), top.suit())),
        result
    );
    result
}

/// First foundation index that would accept `card`, if any.
pub fn find_foundation_for(card: &Card, foundations: &[Stack]) -> Option<usize> {
    foundations
        .iter()
        .position(|foundation| can_move_to_foundation(card, foundation.top()))
}
