use derive_more::{Display, Error};

use crate::games::SessionRng;
use super::board::Board;
use super::bot_type::BotType;
use super::game_state::TicTacToeGameState;
use super::types::{GameResult, Mark, Position};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    #[display("no empty cell left to play")]
    NoAvailableMoves,
    #[display("the game on this board is already decided")]
    GameAlreadyDecided,
    #[display("a bot must play X or O")]
    InvalidMover,
}

/// Snapshot handed to a bot. `bot_mark` is both the mover and the side the bot plays.
#[derive(Debug, Clone)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.clone(),
            bot_mark: state.computer_mark,
        }
    }
}

/// The chosen cell, the score backing it and the board after the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub score: i32,
    pub board: Board,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxOutcome {
    pub score: i32,
    pub best_move: Option<Position>,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<BotMove, BotError> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<BotMove, BotError> {
    if input.bot_mark == Mark::Empty {
        return Err(BotError::InvalidMover);
    }

    let available_moves = input.board.available_moves();
    let position = rng.pick(&available_moves).ok_or(BotError::NoAvailableMoves)?;

    let mut board = input.board.clone();
    board.set(position, input.bot_mark);

    Ok(BotMove {
        position,
        score: DRAW_SCORE,
        board,
    })
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<BotMove, BotError> {
    let bot_mark = input.bot_mark;
    let mut board = input.board.clone();

    let outcome = minimax(&mut board, bot_mark, bot_mark)?;
    let Some(position) = outcome.best_move else {
        return Err(if board.is_full() {
            BotError::NoAvailableMoves
        } else {
            BotError::GameAlreadyDecided
        });
    };

    board.set(position, bot_mark);

    Ok(BotMove {
        position,
        score: outcome.score,
        board,
    })
}

/// Full-depth minimax from the point of view of `computer`, with `mover` to play.
///
/// Every trial write on `board` is undone before the next candidate is tried, so the
/// board is unchanged when this returns. Ties keep the first move in row-major order.
pub fn minimax(board: &mut Board, mover: Mark, computer: Mark) -> Result<MinimaxOutcome, BotError> {
    let human = computer.opponent().ok_or(BotError::InvalidMover)?;
    if mover == Mark::Empty {
        return Err(BotError::InvalidMover);
    }
    Ok(search(board, mover, computer, human))
}

fn search(board: &mut Board, mover: Mark, computer: Mark, human: Mark) -> MinimaxOutcome {
    match evaluate(board, human, computer) {
        GameResult::Undecided => {}
        GameResult::Draw => return terminal(DRAW_SCORE),
        decided if decided.winner() == Some(computer) => return terminal(WIN_SCORE),
        _ => return terminal(LOSS_SCORE),
    }

    let is_maximizing = mover == computer;
    let next_mover = if is_maximizing { human } else { computer };

    let mut best: Option<(i32, Position)> = None;
    for position in board.available_moves() {
        board.set(position, mover);
        let score = search(board, next_mover, computer, human).score;
        board.set(position, Mark::Empty);

        let improves = match best {
            None => true,
            Some((best_score, _)) if is_maximizing => score > best_score,
            Some((best_score, _)) => score < best_score,
        };
        if improves {
            best = Some((score, position));
        }
    }

    // Undecided boards always have an empty cell.
    match best {
        Some((score, position)) => MinimaxOutcome {
            score,
            best_move: Some(position),
        },
        None => terminal(DRAW_SCORE),
    }
}

fn terminal(score: i32) -> MinimaxOutcome {
    MinimaxOutcome {
        score,
        best_move: None,
    }
}
