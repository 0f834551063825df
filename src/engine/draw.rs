// src/engine/draw.rs
//! Turning cards from the stock and recycling the shown cards back into it.

use log::{debug, info};

use super::GameEngine;
use crate::logic::rules::stock_waste;

/// What a call to [`GameEngine::draw_from_deck`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// This many cards were turned face-up onto the waste.
    Drew(usize),
    /// The stock was empty, so this many shown cards went back into it face-down.
    Recycled(usize),
}

impl GameEngine {
    /// Clears the waste, then either turns up to `draw_count` cards from the
    /// stock or, if the stock is exhausted, turns every shown card back over.
    ///
    /// Recycling keeps the order: the next pass through the stock shows the
    /// remaining cards in the same sequence as the last one. There is no reshuffle.
    pub fn draw_from_deck(&mut self) -> DrawOutcome {
        // Waste is stored bottom to top, which is also the order it was drawn in.
        let shown = self.waste.take_all();
        self.discard.extend(shown);

        if !stock_waste::can_deal_from_stock(self.stock.is_empty()) {
            return self.recycle_discard();
        }

        let mut drawn = 0;
        while drawn < self.config.draw_count {
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.set_face_up(true);
            debug!("Drew {} from stock", card);
            self.waste.push(card);
            drawn += 1;
        }
        DrawOutcome::Drew(drawn)
    }

    fn recycle_discard(&mut self) -> DrawOutcome {
        if !stock_waste::can_reset_stock_from_waste(self.stock.is_empty(), self.discard.is_empty()) {
            debug!("Nothing left to draw or recycle");
            return DrawOutcome::Recycled(0);
        }

        let recycled = self.discard.take_all();
        let count = recycled.len();
        // First card drawn goes on top so it is drawn first again.
        self.stock.extend(recycled.into_iter().rev().map(|mut card| {
            card.set_face_up(false);
            card
        }));
        info!("Recycled {} cards back into the stock", count);
        DrawOutcome::Recycled(count)
    }
}
