use super::board::Board;
use super::types::{GameResult, LineKind, Mark, Position, WinningLine};

/// Scores a board for the two participants.
///
/// Candidates are checked in order, `first` before `second`, and for each candidate
/// rows come before columns, columns before the main diagonal and the main diagonal
/// before the anti-diagonal. The first complete line decides the result, which only
/// matters for boards where both marks hold a line at once.
pub fn evaluate(board: &Board, first: Mark, second: Mark) -> GameResult {
    if let Some(line) = find_winning_line(board, &[first, second]) {
        return GameResult::won_by(line.mark);
    }
    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::Undecided
    }
}

pub fn check_win(board: &Board, candidates: &[Mark]) -> Option<Mark> {
    find_winning_line(board, candidates).map(|line| line.mark)
}

pub fn find_winning_line(board: &Board, candidates: &[Mark]) -> Option<WinningLine> {
    let side = board.side();
    let Some(last) = side.checked_sub(1) else {
        return None;
    };

    for &mark in candidates {
        // An all-empty line is not a win.
        if mark == Mark::Empty {
            continue;
        }

        for y in 0..side {
            if is_line_complete(board, mark, (0..side).map(|x| Position::new(x, y))) {
                return Some(WinningLine::new(
                    mark,
                    LineKind::Row(y),
                    Position::new(0, y),
                    Position::new(last, y),
                ));
            }
        }

        for x in 0..side {
            if is_line_complete(board, mark, (0..side).map(|y| Position::new(x, y))) {
                return Some(WinningLine::new(
                    mark,
                    LineKind::Column(x),
                    Position::new(x, 0),
                    Position::new(x, last),
                ));
            }
        }

        if is_line_complete(board, mark, (0..side).map(|i| Position::new(i, i))) {
            return Some(WinningLine::new(
                mark,
                LineKind::MainDiagonal,
                Position::new(0, 0),
                Position::new(last, last),
            ));
        }

        if is_line_complete(board, mark, (0..side).map(|i| Position::new(i, last - i))) {
            return Some(WinningLine::new(
                mark,
                LineKind::AntiDiagonal,
                Position::new(0, last),
                Position::new(last, 0),
            ));
        }
    }

    None
}

fn is_line_complete(board: &Board, mark: Mark, mut line: impl Iterator<Item = Position>) -> bool {
    line.all(|position| board.get(position) == Some(mark))
}
