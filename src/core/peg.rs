//! Peg identification.
//!
//! Exactly three pegs exist for the lifetime of a puzzle. They are never
//! created or destroyed, so `Peg` is a plain fieldless enum rather than an
//! allocated entity.
//!
//! ## Labels
//!
//! `FromStr` maps user-facing labels onto the three canonical pegs:
//! - canonical: `left`, `middle`, `right`
//! - shorthand: `l`, `m`, `r`
//! - historical column labels: `a`, `b`, `c`
//!
//! Label parsing is a boundary concern: the rules engine only ever sees
//! already-parsed `Peg` values, never raw labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three fixed peg positions.
///
/// ```
/// use hanoi::core::Peg;
///
/// let peg: Peg = "middle".parse().unwrap();
/// assert_eq!(peg, Peg::Middle);
/// assert_eq!(peg.index(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Peg {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl Peg {
    /// All pegs in display order, left to right.
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    /// Number of pegs.
    pub const COUNT: usize = 3;

    /// Index into a `[_; 3]` stack array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical label for this peg.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Peg::Left => "left",
            Peg::Middle => "middle",
            Peg::Right => "right",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A label that names no peg.
///
/// Surfaced to the user by the session loop; the engine never sees one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPeg {
    /// The offending label, as entered.
    pub label: String,
}

impl fmt::Display for UnknownPeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no such stack: {}", self.label)
    }
}

impl std::error::Error for UnknownPeg {}

impl FromStr for Peg {
    type Err = UnknownPeg;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | "a" => Ok(Peg::Left),
            "middle" | "m" | "b" => Ok(Peg::Middle),
            "right" | "r" | "c" => Ok(Peg::Right),
            _ => Err(UnknownPeg {
                label: s.trim().to_string(),
            }),
        }
    }
}
