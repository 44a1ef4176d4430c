//! Interactive turn loop over injected I/O.
//!
//! The rules engine never touches a terminal. `Session` composes it with
//! any `BufRead` input and `Write` output, which is what makes whole games
//! scriptable in tests: feed a byte slice in, collect a `Vec<u8>` out.
//!
//! Each turn, synchronously:
//! 1. render the three stacks, bottom-to-top, labelled by peg
//! 2. prompt for the start and end stacks
//! 3. parse the labels (unknown labels never reach the engine)
//! 4. play the move; print a rejection or victory notice as appropriate
//!
//! The loop returns instead of exiting the process: `Won` on victory,
//! `Abandoned` when input closes first. The binary maps those to exit
//! codes.

use std::io::{self, BufRead, Write};

use crate::core::moves::Move;
use crate::core::peg::Peg;
use crate::core::state::PuzzleState;
use crate::rules::{Hanoi, TurnOutcome};

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The puzzle was solved.
    Won,
    /// Input closed before the puzzle was solved.
    Abandoned,
}

/// One interactive puzzle session.
///
/// Owns the rules, the state, and both ends of the conversation.
pub struct Session<R, W> {
    rules: Hanoi,
    state: PuzzleState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session at the initial position.
    pub fn new(rules: Hanoi, input: R, output: W) -> Self {
        let state = rules.initial_state();
        Self {
            rules,
            state,
            input,
            output,
        }
    }

    /// Current puzzle state, for inspection after `run` returns.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Run turns until the puzzle is won or input closes.
    ///
    /// Only I/O failures are errors; illegal moves and unknown labels are
    /// reported to the user and the loop continues.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        loop {
            self.render()?;

            let Some(from) = self.prompt("start stack: ")? else {
                return Ok(SessionOutcome::Abandoned);
            };
            let Some(to) = self.prompt("end stack: ")? else {
                return Ok(SessionOutcome::Abandoned);
            };

            let (from, to) = match (from.parse::<Peg>(), to.parse::<Peg>()) {
                (Ok(from), Ok(to)) => (from, to),
                (Err(err), _) | (_, Err(err)) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            match self.rules.play(&mut self.state, Move::new(from, to)) {
                Ok(TurnOutcome::Won) => {
                    writeln!(self.output, "You win!")?;
                    return Ok(SessionOutcome::Won);
                }
                Ok(TurnOutcome::Continue) => {}
                Err(_) => {
                    writeln!(self.output, "Illegal move! Try again.")?;
                }
            }
        }
    }

    /// Render all three stacks, bottom-to-top, labelled by peg.
    fn render(&mut self) -> io::Result<()> {
        for peg in Peg::ALL {
            write!(self.output, "{}:", peg)?;
            for disc in self.state.stack(peg) {
                write!(self.output, " {}", disc)?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
