//! Puzzle state: three per-peg disc stacks.
//!
//! ## Invariants
//!
//! Every reachable state satisfies two invariants:
//!
//! 1. **Per-stack order**: within each stack, ranks strictly decrease from
//!    bottom (index 0) to top (last index).
//! 2. **Disc conservation**: across all three stacks, the ranks are exactly
//!    `1..=N`, each appearing once. Discs are relocated, never created or
//!    destroyed.
//!
//! The state itself is dumb storage: mutation is crate-internal
//! ([`PuzzleState::lift`] / [`PuzzleState::place`]) and goes through the
//! rules engine, which is what protects invariant 1. Invariant 2 holds
//! because lift/place pair a single pop with a single push.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::disc::Disc;
use super::peg::Peg;

/// Per-peg disc stack, bottom at index 0, top at the end.
///
/// `SmallVec` keeps the common 4-disc puzzle entirely inline, no heap.
pub type Stack = SmallVec<[Disc; 8]>;

/// The stacks do not form a well-formed puzzle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidState {
    /// A disc rests on a smaller or equal-ranked disc.
    MisorderedStack {
        /// Peg whose stack violates the ordering invariant.
        peg: Peg,
    },
    /// The ranks across all stacks are not exactly `1..=N`, each once.
    BadDiscSet,
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidState::MisorderedStack { peg } => {
                write!(f, "disc order violated on the {} peg", peg)
            }
            InvalidState::BadDiscSet => {
                write!(f, "disc ranks are not exactly 1..=N, each once")
            }
        }
    }
}

impl std::error::Error for InvalidState {}

/// State of the three peg stacks.
///
/// Created once per session at the initial position, then mutated in place
/// by the rules engine, one move at a time. There is exactly one owner and
/// one writer; no interior mutability is needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Stacks indexed by `Peg::index()`.
    stacks: [Stack; 3],
}

impl PuzzleState {
    /// Create the initial position: all `disc_count` discs descending on
    /// `start`, the other two pegs empty.
    #[must_use]
    pub fn new(disc_count: u8, start: Peg) -> Self {
        assert!(disc_count > 0, "Must have at least 1 disc");

        let mut stacks: [Stack; 3] = Default::default();
        stacks[start.index()].extend((1..=disc_count).rev().map(Disc::new));

        Self { stacks }
    }

    /// Build a state from raw rank stacks, bottom-to-top, indexed
    /// left/middle/right.
    ///
    /// Validates both state invariants; rejects anything no sequence of
    /// legal moves could reach.
    ///
    /// ```
    /// use hanoi::core::{Peg, PuzzleState};
    ///
    /// let state = PuzzleState::from_stacks([&[4, 3, 2], &[1], &[]]).unwrap();
    /// assert_eq!(state.top(Peg::Middle).unwrap().rank(), 1);
    ///
    /// assert!(PuzzleState::from_stacks([&[2, 3], &[1], &[4]]).is_err());
    /// ```
    pub fn from_stacks(ranks: [&[u8]; 3]) -> Result<Self, InvalidState> {
        let mut stacks: [Stack; 3] = Default::default();

        for (peg, stack_ranks) in Peg::ALL.into_iter().zip(ranks) {
            for window in stack_ranks.windows(2) {
                if window[1] >= window[0] {
                    return Err(InvalidState::MisorderedStack { peg });
                }
            }
            stacks[peg.index()].extend(stack_ranks.iter().copied().map(Disc::new));
        }

        // Conservation: ranks must be a permutation of 1..=N.
        let mut all_ranks: Vec<u8> = ranks.iter().flat_map(|r| r.iter().copied()).collect();
        all_ranks.sort_unstable();
        let expected: Vec<u8> = (1..=all_ranks.len() as u8).collect();
        if all_ranks != expected {
            return Err(InvalidState::BadDiscSet);
        }

        Ok(Self { stacks })
    }

    /// Total number of discs in the puzzle.
    #[must_use]
    pub fn disc_count(&self) -> u8 {
        self.stacks.iter().map(|s| s.len() as u8).sum()
    }

    /// Contents of one peg's stack, bottom-to-top.
    #[must_use]
    pub fn stack(&self, peg: Peg) -> &[Disc] {
        &self.stacks[peg.index()]
    }

    /// Top disc of a peg, if any.
    #[must_use]
    pub fn top(&self, peg: Peg) -> Option<Disc> {
        self.stacks[peg.index()].last().copied()
    }

    /// Check whether a peg holds no discs.
    #[must_use]
    pub fn is_empty(&self, peg: Peg) -> bool {
        self.stacks[peg.index()].is_empty()
    }

    /// Remove and return the top disc of a peg.
    ///
    /// Rules-engine internal: callers must have already established
    /// legality, or the ordering invariant can break on the next `place`.
    pub(crate) fn lift(&mut self, peg: Peg) -> Option<Disc> {
        self.stacks[peg.index()].pop()
    }

    /// Put a disc on top of a peg.
    pub(crate) fn place(&mut self, peg: Peg, disc: Disc) {
        self.stacks[peg.index()].push(disc);
    }
}
