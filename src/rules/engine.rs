//! Puzzle rules: legality, move application, win detection.
//!
//! The `Hanoi` rules object is the only code that mutates a `PuzzleState`.
//! It is pure with respect to I/O, which keeps the whole engine testable
//! without a terminal attached.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::moves::Move;
use crate::core::peg::Peg;
use crate::core::state::PuzzleState;

/// Outcome of one accepted turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The session continues; ask for the next move.
    Continue,
    /// The puzzle is solved. The caller owns session shutdown; the engine
    /// never touches the process lifecycle.
    Won,
}

/// A rejected move.
///
/// The one recoverable error in the system: state is untouched whenever this
/// is returned, and the session simply asks for another move. Carries the
/// rejected move for the notice text, no reason detail beyond "rejected".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMove(pub Move);

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move: {}", self.0)
    }
}

impl std::error::Error for IllegalMove {}

/// The Towers of Hanoi rules.
///
/// Holds the fixed puzzle parameters: disc count, start peg, and the single
/// designated target peg. Winning is checked on the target peg **only** -
/// the full stack sitting on any other peg is not a win.
///
/// ```
/// use hanoi::core::{Move, Peg};
/// use hanoi::rules::{Hanoi, TurnOutcome};
///
/// let rules = Hanoi::default();
/// let mut state = rules.initial_state();
///
/// let outcome = rules.play(&mut state, Move::new(Peg::Left, Peg::Middle)).unwrap();
/// assert_eq!(outcome, TurnOutcome::Continue);
/// assert_eq!(state.top(Peg::Middle).unwrap().rank(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hanoi {
    disc_count: u8,
    start: Peg,
    target: Peg,
}

impl Default for Hanoi {
    /// The reference configuration: four discs, start left, target middle.
    fn default() -> Self {
        Self::new(4, Peg::Left, Peg::Middle)
    }
}

impl Hanoi {
    /// Create a rules object.
    #[must_use]
    pub fn new(disc_count: u8, start: Peg, target: Peg) -> Self {
        assert!(disc_count > 0, "Must have at least 1 disc");
        assert!(start != target, "Start and target pegs must differ");

        Self {
            disc_count,
            start,
            target,
        }
    }

    /// Total number of discs.
    #[must_use]
    pub fn disc_count(&self) -> u8 {
        self.disc_count
    }

    /// Peg the discs start on.
    #[must_use]
    pub fn start(&self) -> Peg {
        self.start
    }

    /// The one peg winning is checked on.
    #[must_use]
    pub fn target(&self) -> Peg {
        self.target
    }

    /// Build the initial position for these rules.
    #[must_use]
    pub fn initial_state(&self) -> PuzzleState {
        PuzzleState::new(self.disc_count, self.start)
    }

    /// Check whether a move is legal in the given state.
    ///
    /// Pure predicate, no side effects:
    /// - empty source: illegal, rejected before any top-of-stack comparison
    /// - empty destination: legal, unconditionally
    /// - otherwise: legal iff top-of-source is strictly smaller
    ///
    /// A move with `from == to` falls out as illegal (a disc is never
    /// strictly smaller than itself).
    #[must_use]
    pub fn is_legal(&self, state: &PuzzleState, mv: Move) -> bool {
        let Some(moving) = state.top(mv.from) else {
            // No disc to move.
            return false;
        };

        match state.top(mv.to) {
            None => true,
            Some(resting) => moving.fits_on(resting),
        }
    }

    /// Apply a move, mutating the state in place.
    ///
    /// Atomic from the caller's view: either the top disc of `mv.from` ends
    /// up on `mv.to`, or `Err(IllegalMove)` is returned and the state is
    /// exactly as it was.
    pub fn apply(&self, state: &mut PuzzleState, mv: Move) -> Result<(), IllegalMove> {
        if !self.is_legal(state, mv) {
            return Err(IllegalMove(mv));
        }

        let disc = state.lift(mv.from).expect("legal move has a source disc");
        state.place(mv.to, disc);
        Ok(())
    }

    /// Check whether the state is won.
    ///
    /// True iff the target peg holds exactly `[N, N-1, ..., 1]`
    /// bottom-to-top.
    #[must_use]
    pub fn is_won(&self, state: &PuzzleState) -> bool {
        let stack = state.stack(self.target);

        stack.len() == self.disc_count as usize
            && stack
                .iter()
                .zip((1..=self.disc_count).rev())
                .all(|(disc, rank)| disc.rank() == rank)
    }

    /// Play one turn: apply the move, then evaluate the win condition.
    ///
    /// This is the orchestration the session loop composes with I/O.
    pub fn play(&self, state: &mut PuzzleState, mv: Move) -> Result<TurnOutcome, IllegalMove> {
        self.apply(state, mv)?;

        if self.is_won(state) {
            Ok(TurnOutcome::Won)
        } else {
            Ok(TurnOutcome::Continue)
        }
    }
}
