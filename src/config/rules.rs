// src/config/rules.rs
//! Table dimensions and the few rule switches a host may change.

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;
pub const TABLEAU_PILES: usize = 7;
pub const FOUNDATION_PILES: usize = 4;
/// Cards turned from the stock per draw.
pub const DRAW_COUNT: usize = 3;
/// Cards dealt into the tableau: 1 + 2 + ... + 7.
pub const TABLEAU_DEAL_SIZE: usize = TABLEAU_PILES * (TABLEAU_PILES + 1) / 2;

/// How much of a tableau run is checked before it may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunValidation {
    /// Only the run's bottom card is compared with the destination.
    #[default]
    BottomCardOnly,
    /// The run must also be face-up throughout and descend in alternating colors.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub draw_count: usize,
    pub run_validation: RunValidation,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { draw_count: DRAW_COUNT, run_validation: RunValidation::default() }
    }
}

impl RuleConfig {
    /// Parses a JSON rules object; missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RuleConfig>(json).map(RuleConfig::normalized)
    }

    /// Draw count clamped to `1..=DRAW_COUNT`.
    pub fn normalized(self) -> Self {
        Self { draw_count: self.draw_count.clamp(1, DRAW_COUNT), ..self }
    }
}
