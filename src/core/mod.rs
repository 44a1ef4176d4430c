//! Core puzzle types: pegs, discs, moves, state.
//!
//! These are the dumb building blocks; the stacking rule itself lives in
//! `crate::rules` and is the only writer of `PuzzleState`.

pub mod disc;
pub mod moves;
pub mod peg;
pub mod state;

pub use disc::Disc;
pub use moves::Move;
pub use peg::{Peg, UnknownPeg};
pub use state::{InvalidState, PuzzleState, Stack};
