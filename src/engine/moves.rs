// src/engine/moves.rs
//! Player moves. Each one checks the rules against the current piles first
//! and only touches the table if the move is legal.

use log::{debug, warn};

use super::GameEngine;
use crate::components::stack::StackType;
use crate::logic::rules::{self, foundation, tableau};

impl GameEngine {
    /// Moves the playable waste card onto tableau pile `to_pile`.
    pub fn move_card_from_waste_to_pile(&mut self, to_pile: usize) -> bool {
        let Some(target) = self.tableau.get(to_pile) else {
            warn!("Waste -> Tableau({}): no such pile", to_pile);
            return false;
        };
        let Some(card) = self.waste.top() else {
            return false;
        };
        if !tableau::can_move_to_tableau(card, target.top()) {
            return false;
        }

        if let Some(card) = self.waste.pop() {
            debug!("Waste -> Tableau({}): {}", to_pile, card);
            self.tableau[to_pile].push(card);
        }
        true
    }

    /// Moves the cards of tableau pile `from_pile` starting at `card_index`
    /// (0 is the bottom card) through its top onto pile `to_pile`.
    ///
    /// The bottom card of the moved run must fit the destination. How much
    /// of the run itself is checked depends on [`RuleConfig::run_validation`].
    ///
    /// [`RuleConfig::run_validation`]: crate::config::RuleConfig
    pub fn move_cards(&mut self, from_pile: usize, card_index: usize, to_pile: usize) -> bool {
        if from_pile == to_pile {
            warn!("Tableau({}) -> Tableau({}): source and destination are the same pile", from_pile, to_pile);
            return false;
        }
        let (Some(source), Some(target)) = (self.tableau.get(from_pile), self.tableau.get(to_pile)) else {
            warn!("Tableau({}) -> Tableau({}): no such pile", from_pile, to_pile);
            return false;
        };
        let Some(run) = source.run_from(card_index) else {
            warn!("Tableau({}) has no card at position {}", from_pile, card_index);
            return false;
        };
        if !tableau::can_move_run_to_tableau(run, target.top(), self.config.run_validation) {
            return false;
        }

        let Some(run) = self.tableau[from_pile].split_off(card_index) else {
            return false;
        };
        debug!("Tableau({}) -> Tableau({}): {} cards", from_pile, to_pile, run.len());
        self.tableau[to_pile].extend(run);
        self.expose_top(from_pile);
        true
    }

    /// Moves the top card of tableau pile `from_pile` onto foundation `foundation_index`.
    pub fn move_to_foundation(&mut self, from_pile: usize, foundation_index: usize) -> bool {
        let (Some(source), Some(target)) =
            (self.tableau.get(from_pile), self.foundations.get(foundation_index))
        else {
            warn!("Tableau({}) -> Foundation({}): no such pile", from_pile, foundation_index);
            return false;
        };
        let Some(card) = source.top() else {
            return false;
        };
        if !foundation::can_move_to_foundation(card, target.top()) {
            return false;
        }

        if let Some(card) = self.tableau[from_pile].pop() {
            debug!("Tableau({}) -> Foundation({}): {}", from_pile, foundation_index, card);
            self.foundations[foundation_index].push(card);
        }
        self.expose_top(from_pile);
        true
    }

    /// Moves the playable waste card onto foundation `foundation_index`.
    pub fn move_to_foundation_from_waste(&mut self, foundation_index: usize) -> bool {
        let Some(target) = self.foundations.get(foundation_index) else {
            warn!("Waste -> Foundation({}): no such pile", foundation_index);
            return false;
        };
        let Some(card) = self.waste.top() else {
            return false;
        };
        if !foundation::can_move_to_foundation(card, target.top()) {
            return false;
        }

        if let Some(card) = self.waste.pop() {
            debug!("Waste -> Foundation({}): {}", foundation_index, card);
            self.foundations[foundation_index].push(card);
        }
        true
    }

    /// Sends the top card of `source` (the waste or a tableau pile) to the
    /// first foundation that accepts it. Returns the foundation used.
    pub fn auto_move_to_foundation(&mut self, source: StackType) -> Option<usize> {
        let card = match source {
            StackType::Waste => self.waste.top(),
            StackType::Tableau(pile) => self.tableau.get(usize::from(pile)).and_then(|p| p.top()),
            StackType::Stock | StackType::Foundation(_) => {
                warn!("Auto move from {:?} is not allowed", source);
                return None;
            }
        }?;
        let target = rules::find_foundation_for(card, &self.foundations)?;

        let moved = match source {
            StackType::Tableau(pile) => self.move_to_foundation(usize::from(pile), target),
            _ => self.move_to_foundation_from_waste(target),
        };
        moved.then_some(target)
    }

    /// Turns up the card left on top of tableau pile `pile` if it is face-down.
    fn expose_top(&mut self, pile: usize) {
        if let Some(stack) = self.tableau.get_mut(pile) {
            if stack.reveal_top() {
                debug!("Tableau({}): exposed {}", pile, stack.top().map(ToString::to_string).unwrap_or_default());
            }
        }
    }
}
