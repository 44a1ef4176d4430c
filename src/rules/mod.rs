//! Puzzle rules engine.

pub mod engine;

pub use engine::{Hanoi, IllegalMove, TurnOutcome};
