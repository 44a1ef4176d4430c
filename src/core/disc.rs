//! Disc ranks.
//!
//! A disc is a ranked token: rank 1 is the smallest disc, rank N the
//! largest. Ranks are unique within a puzzle, so discs are immutable
//! values rather than distinguishable entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A disc, identified by its size rank.
///
/// Ordering follows rank: `Disc(1) < Disc(4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disc(pub u8);

impl Disc {
    /// Create a disc with the given rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Get the size rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Check whether this disc may rest directly on `below`.
    ///
    /// Strictly smaller only; ranks are unique, so equality never occurs in
    /// a well-formed puzzle, but an equal rank would still be rejected.
    #[must_use]
    pub const fn fits_on(self, below: Disc) -> bool {
        self.0 < below.0
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
