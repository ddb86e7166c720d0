use std::io::{self, BufRead, Write};

use common::games::tictactoe::{Mark, SessionPhase, TicTacToeSession};

use crate::input::{PlayerCommand, parse_cell, parse_command};
use crate::renderer::render_snapshot;

const HELP: &str = "Commands: x / o to pick a side, a cell number to move, 'reset', 'help', 'quit'";

/// Feeds player input into the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    default_side: Option<Mark>,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", HELP)?;
    if default_side.is_none() {
        // Observers only hear about transitions, so the first prompt is written here.
        write!(out, "{}", render_snapshot(&session.snapshot()))?;
    }
    start_game(session, default_side, out)?;

    for line in input.lines() {
        match parse_command(&line?) {
            PlayerCommand::Empty => {}
            PlayerCommand::Quit => break,
            PlayerCommand::Help => writeln!(out, "{}", HELP)?,
            PlayerCommand::Reset => {
                session.reset();
                start_game(session, default_side, out)?;
            }
            PlayerCommand::Value(value) => handle_value(session, &value, out)?,
        }
    }

    Ok(())
}

fn start_game<W: Write>(
    session: &mut TicTacToeSession,
    default_side: Option<Mark>,
    out: &mut W,
) -> io::Result<()> {
    if let Some(mark) = default_side
        && let Err(e) = session.choose_side(mark)
    {
        writeln!(out, "{}", e)?;
    }
    Ok(())
}

fn handle_value<W: Write>(
    session: &mut TicTacToeSession,
    value: &str,
    out: &mut W,
) -> io::Result<()> {
    match session.phase() {
        SessionPhase::AwaitingSideChoice => {
            if let Err(e) = session.choose_side_value(value) {
                writeln!(out, "{}", e)?;
            }
        }
        SessionPhase::InProgress => {
            let board_side = session.settings().board_side;
            match parse_cell(value, board_side * board_side) {
                Ok(cell_index) => {
                    if !session.apply_human_move(cell_index) {
                        writeln!(out, "Cell {} is not available", value)?;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        SessionPhase::Finished => {
            writeln!(out, "The game is over, type 'reset' to play again")?;
        }
    }
    Ok(())
}
