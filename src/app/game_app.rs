// src/app/game_app.rs
//! The boundary a browser front end talks to. It only forwards calls to the
//! engine and serialises state; drawing and input stay on the JS side.

use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::config::rules::RuleConfig;
use crate::engine::{DrawOutcome, GameEngine};

#[wasm_bindgen]
pub struct GameApp {
    engine: GameEngine,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: dealing a new game");
        Self { engine: GameEngine::new() }
    }

    /// Deals a reproducible game from `seed`.
    pub fn with_seed(seed: u64) -> GameApp {
        info!("GameApp: dealing game with seed {}", seed);
        Self { engine: GameEngine::from_seed(seed) }
    }

    /// Deals a game from `seed` under the rules in `rules_json`
    /// (e.g. `{"run_validation": "strict"}`).
    pub fn with_rules(seed: u64, rules_json: &str) -> Result<GameApp, JsValue> {
        let config = RuleConfig::from_json(rules_json).map_err(|e| {
            let error_msg = format!("Failed to parse rules: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        Ok(Self { engine: GameEngine::from_seed_with_config(seed, config) })
    }

    /// Always succeeds; returns how many cards were turned (0 after a recycle).
    pub fn draw_from_deck(&mut self) -> usize {
        match self.engine.draw_from_deck() {
            DrawOutcome::Drew(count) => count,
            DrawOutcome::Recycled(_) => 0,
        }
    }

    pub fn move_card_from_waste_to_pile(&mut self, to_pile: usize) -> bool {
        self.engine.move_card_from_waste_to_pile(to_pile)
    }

    pub fn move_cards(&mut self, from_pile: usize, card_index: usize, to_pile: usize) -> bool {
        self.engine.move_cards(from_pile, card_index, to_pile)
    }

    pub fn move_to_foundation(&mut self, from_pile: usize, foundation_index: usize) -> bool {
        self.engine.move_to_foundation(from_pile, foundation_index)
    }

    pub fn move_to_foundation_from_waste(&mut self, foundation_index: usize) -> bool {
        self.engine.move_to_foundation_from_waste(foundation_index)
    }

    /// The current table as JSON (see `protocol::GameStateData`).
    pub fn state_json(&self) -> Result<String, JsValue> {
        self.engine.to_json().map_err(|e| {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            JsValue::from_str(&error_msg)
        })
    }

    /// Plain-text dump of every pile, for the browser console.
    pub fn debug_dump(&self) -> String {
        self.engine.to_string()
    }
}

impl GameApp {
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}
