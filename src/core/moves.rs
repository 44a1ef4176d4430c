//! Move representation: source peg + destination peg.
//!
//! A move always relocates the topmost disc of `from` onto `to`, so the two
//! pegs are the whole description. Whether the move is actually legal is the
//! rules engine's question, not the move's.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::peg::Peg;

/// A proposed relocation of one top disc.
///
/// ```
/// use hanoi::core::{Move, Peg};
///
/// let mv = Move::new(Peg::Left, Peg::Right);
/// assert_eq!(format!("{}", mv), "left -> right");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Peg to take the top disc from.
    pub from: Peg,
    /// Peg to place that disc on.
    pub to: Peg,
}

impl Move {
    /// Create a move between two pegs.
    ///
    /// `from` and `to` need not be distinct; a move onto the same peg is
    /// representable and always rejected by the rules.
    #[must_use]
    pub const fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
