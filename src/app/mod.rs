// src/app/mod.rs

pub mod game_app;

pub use game_app::GameApp;
