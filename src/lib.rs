// src/lib.rs
//! Rule engine for draw-three Klondike solitaire.
//!
//! [`GameEngine`] owns one dealt game and applies the player's moves.
//! [`app::GameApp`] exposes the same operations to a JavaScript front end.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod engine;
pub mod logic;
pub mod protocol;

pub use components::{Card, CardColor, Rank, Stack, StackType, Suit};
pub use config::{RuleConfig, RunValidation};
pub use engine::{DealError, DrawOutcome, GameEngine};
pub use protocol::GameStateData;

// Runs when the wasm module loads.
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
