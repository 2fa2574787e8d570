//! Line-based game loop
//!
//! Reads one line at a time, turns it into session actions and prints the
//! session after each line. This loop owns the `Session`; nothing else holds
//! a reference to it while an action is processed.

use crate::game::{Action, PlayMode, Response, Session};
use crate::output::summary::session_lines;
use crate::save::SaveStore;
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    words: &WordList,
    store: &dyn SaveStore,
    mode: PlayMode,
) -> Result<()> {
    writeln!(output, "Guess the five-letter word in {} tries.", crate::core::MAX_GUESSES)?;
    writeln!(output, "Type a word and press Enter. '-' deletes a letter, ':quit' exits.\n")?;

    let mut mode = mode;
    let mut session = Session::start(mode, words, store);
    print_session(&mut output, &session)?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            debug!("input closed");
            break;
        }

        let mut response = Response::Continue;
        for action in Action::parse_line(&line) {
            response = session.handle(action);
            if response != Response::Continue {
                break;
            }
        }

        match response {
            Response::Continue => {}
            Response::Quit => break,
            Response::NewSession => {
                mode = mode.next();
                session = Session::start(mode, words, store);
                writeln!(output, "\nNew game {mode}")?;
            }
        }

        print_session(&mut output, &session)?;
    }

    writeln!(output, "\nThanks for playing!")?;
    Ok(())
}

fn print_session<W: Write>(output: &mut W, session: &Session) -> Result<()> {
    writeln!(output)?;
    for line in session_lines(session) {
        writeln!(output, "{line}")?;
    }
    output.flush()?;
    Ok(())
}
