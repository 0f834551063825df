//! Placement rules for the tableau columns.

use log::debug;

use super::common::stacks_on;
use crate::components::card::{Card, Rank};
use crate::config::rules::RunValidation;

/// Whether `card_to_move` may be placed on a column whose top card is `target_top`
/// (`None` for an empty column). Empty columns only take a King.
pub fn can_move_to_tableau(card_to_move: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        Some(top) => {
            let valid = stacks_on(card_to_move, top);
            debug!(
                "[Rule Check] {:?} {:?} onto {:?} {:?}: {}",
                card_to_move.rank(),
                card_to_move.suit(),
                top.rank(),
                top.suit(),
                valid
            );
            valid
        }
        None => {
            let is_king = card_to_move.rank() == Rank::King;
            debug!("[Rule Check] {:?} onto empty column: {}", card_to_move.rank(), is_king);
            is_king
        }
    }
}

/// True if `run` (bottom first) is face-up throughout and every card sits
/// legally on the one beneath it.
pub fn is_valid_run(run: &[Card]) -> bool {
    !run.is_empty()
        && run.iter().all(Card::is_face_up)
        && run.windows(2).all(|pair| stacks_on(&pair[1], &pair[0]))
}

/// Whether the run `run` (bottom first) may move onto a column topped by `target_top`.
///
/// The run's bottom card is always checked against the destination. Under
/// [`RunValidation::Strict`] the run itself must also be well formed.
pub fn can_move_run_to_tableau(
    run: &[Card],
    target_top: Option<&Card>,
    validation: RunValidation,
) -> bool {
    let Some(bottom_card) = run.first() else {
        return false;
    };
    if validation == RunValidation::Strict && !is_valid_run(run) {
        debug!("[Rule Check] run of {} starting at {:?} is not well formed", run.len(), bottom_card.rank());
        return false;
    }
    can_move_to_tableau(bottom_card, target_top)
}
