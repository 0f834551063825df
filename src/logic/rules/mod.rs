// src/logic/rules/mod.rs
//! Solitaire placement rules. Every check here is a pure function of the
//! cards involved; the engine decides what to do with the answer.

pub mod common;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;


pub use common::*;
pub use foundation::*;
pub use stock_waste::*;
pub use tableau::*;
