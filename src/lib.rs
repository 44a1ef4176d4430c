//! # rust-hanoi
//!
//! An interactive Towers of Hanoi puzzle: a small I/O-free rules engine
//! plus a line-based terminal session that drives it.
//!
//! ## Design Principles
//!
//! 1. **I/O-Free Core**: The rules engine knows nothing about terminals or
//!    the process lifecycle. It answers three questions - is this move
//!    legal, what does applying it do, is the puzzle won - and nothing else.
//!
//! 2. **Single Owner, Single Writer**: `PuzzleState` is constructed once,
//!    owned by the session, and mutated only through the rules engine. No
//!    locking, no interior mutability.
//!
//! 3. **Injected I/O**: The turn loop is a plain synchronous function over
//!    any `BufRead`/`Write` pair, so whole sessions run in tests against
//!    in-memory buffers.
//!
//! ## Modules
//!
//! - `core`: pegs, discs, moves, puzzle state
//! - `rules`: legality, move application, win detection
//! - `session`: synchronous turn loop with injected input/output

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Disc, InvalidState, Move, Peg, PuzzleState, Stack, UnknownPeg};

pub use crate::rules::{Hanoi, IllegalMove, TurnOutcome};

pub use crate::session::{Session, SessionOutcome};
