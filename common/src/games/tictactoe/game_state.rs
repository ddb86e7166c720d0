use derive_more::{Display, Error};

use super::board::Board;
use super::bot_controller::BotMove;
use super::types::{GameResult, Mark, Position, SideChoiceError, WinningLine};
use super::win_detector::{evaluate, find_winning_line};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[display("no game in progress")]
    NoGameInProgress,
    #[display("game is already over")]
    GameOver,
    #[display("not the human's turn")]
    NotHumanTurn,
    #[display("cell {index} is outside the board")]
    OutOfBounds { index: usize },
    #[display("cell ({x}, {y}) is already marked")]
    CellOccupied { x: usize, y: usize },
}

/// One game in progress or finished. Human and computer marks are fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub computer_mark: Mark,
    pub human_turn: bool,
    pub result: GameResult,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    /// The human always moves first.
    pub fn new(side: usize, human_mark: Mark) -> Result<Self, SideChoiceError> {
        let computer_mark = human_mark.opponent().ok_or(SideChoiceError::InvalidMark)?;
        Ok(Self {
            board: Board::new(side),
            human_mark,
            computer_mark,
            human_turn: true,
            result: GameResult::Undecided,
            winning_line: None,
            last_move: None,
        })
    }

    pub fn current_mark(&self) -> Mark {
        if self.human_turn {
            self.human_mark
        } else {
            self.computer_mark
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_decided()
    }

    pub fn position_for_index(&self, index: usize) -> Result<Position, MoveError> {
        self.board
            .position_of(index)
            .ok_or(MoveError::OutOfBounds { index })
    }

    /// Places the current mover's mark, flips the turn and re-evaluates the board.
    pub fn place_mark(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let Some(index) = self.board.index_of(position) else {
            return Err(MoveError::OutOfBounds {
                index: position.y * self.board.side() + position.x,
            });
        };

        if !self.board.is_valid_move(position) {
            return Err(MoveError::CellOccupied {
                x: position.x,
                y: position.y,
            });
        }

        debug_assert_eq!(self.board.cells()[index], Mark::Empty);
        self.board.set(position, self.current_mark());
        self.last_move = Some(position);
        self.human_turn = !self.human_turn;

        self.check_game_over();
        Ok(())
    }

    /// Applies a computer move; its board must be the current board plus that one mark.
    pub fn apply_bot_move(&mut self, bot_move: &BotMove) -> Result<(), MoveError> {
        let mover = self.current_mark();
        self.place_mark(bot_move.position)?;
        debug_assert_eq!(self.board, bot_move.board, "bot board diverged for {:?}", mover);
        Ok(())
    }

    fn check_game_over(&mut self) {
        self.result = evaluate(&self.board, self.human_mark, self.computer_mark);
        self.winning_line = if self.result.winner().is_some() {
            find_winning_line(&self.board, &[self.human_mark, self.computer_mark])
        } else {
            None
        };
    }

    pub fn winner_is_human(&self) -> Option<bool> {
        self.result.winner().map(|mark| mark == self.human_mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::LineKind;

    #[test]
    fn test_new_game() {
        let state = TicTacToeGameState::new(3, Mark::O).unwrap();
        assert_eq!(state.computer_mark, Mark::X);
        assert!(state.human_turn);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.result, GameResult::Undecided);
        assert_eq!(state.board, Board::new(3));
    }

    #[test]
    fn test_new_game_rejects_empty_side() {
        assert_eq!(
            TicTacToeGameState::new(3, Mark::Empty).unwrap_err(),
            SideChoiceError::InvalidMark
        );
    }

    #[test]
    fn test_place_mark_flips_turn() {
        let mut state = TicTacToeGameState::new(3, Mark::X).unwrap();
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.board.get(Position::new(1, 1)), Some(Mark::X));
        assert!(!state.human_turn);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));

        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.board.get(Position::new(0, 0)), Some(Mark::O));
        assert!(state.human_turn);
    }

    #[test]
    fn test_place_mark_on_occupied_cell() {
        let mut state = TicTacToeGameState::new(3, Mark::X).unwrap();
        state.place_mark(Position::new(0, 0)).unwrap();
        let board_before = state.board.clone();
        assert_eq!(
            state.place_mark(Position::new(0, 0)),
            Err(MoveError::CellOccupied { x: 0, y: 0 })
        );
        assert_eq!(state.board, board_before);
        assert!(!state.human_turn);
    }

    #[test]
    fn test_place_mark_out_of_bounds() {
        let mut state = TicTacToeGameState::new(3, Mark::X).unwrap();
        assert_eq!(
            state.place_mark(Position::new(3, 0)),
            Err(MoveError::OutOfBounds { index: 3 })
        );
        assert_eq!(
            state.position_for_index(9),
            Err(MoveError::OutOfBounds { index: 9 })
        );
        assert_eq!(state.position_for_index(4), Ok(Position::new(1, 1)));
    }

    #[test]
    fn test_win_is_recorded_with_line() {
        let mut state = TicTacToeGameState::new(3, Mark::X).unwrap();
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            state.place_mark(Position::new(x, y)).unwrap();
        }
        assert_eq!(state.result, GameResult::XWon);
        assert_eq!(state.winner_is_human(), Some(true));
        assert_eq!(state.winning_line.map(|line| line.kind), Some(LineKind::Row(0)));
        assert_eq!(
            state.place_mark(Position::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_draw_is_recorded() {
        let mut state = TicTacToeGameState::new(3, Mark::X).unwrap();
        // X O X / X O O / O X X
        for (x, y) in [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)] {
            state.place_mark(Position::new(x, y)).unwrap();
        }
        assert_eq!(state.result, GameResult::Draw);
        assert_eq!(state.winning_line, None);
        assert_eq!(state.winner_is_human(), None);
    }
}
