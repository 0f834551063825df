// src/config/mod.rs

pub mod rules;

pub use rules::{RuleConfig, RunValidation};
