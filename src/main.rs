//! Interactive Towers of Hanoi over stdin/stdout.
//!
//! The process exits successfully only when the puzzle is won; a closed
//! stdin or an I/O failure exits with a failure code.

use std::io;
use std::process::ExitCode;

use hanoi::rules::Hanoi;
use hanoi::session::{Session, SessionOutcome};

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(Hanoi::default(), stdin.lock(), stdout.lock());

    match session.run() {
        Ok(SessionOutcome::Won) => ExitCode::SUCCESS,
        Ok(SessionOutcome::Abandoned) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("hanoi: {}", err);
            ExitCode::FAILURE
        }
    }
}
