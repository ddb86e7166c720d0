use std::io::Write;

use common::games::tictactoe::{
    GameResult, LineKind, Mark, SessionObserver, SessionPhase, SessionSnapshot,
};
use common::log;

pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    let mut output = render_board(snapshot);
    output.push('\n');
    output.push_str(&render_status(snapshot));
    output.push('\n');
    output
}

/// Empty cells show their 1-based number so the player knows what to type.
fn render_board(snapshot: &SessionSnapshot) -> String {
    let board = &snapshot.board;
    let side = board.side();
    let width = board.cells().len().to_string().len();

    let rows: Vec<String> = board
        .cells()
        .chunks(side)
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &cell)| match cell {
                    Mark::Empty => format!(" {:>width$} ", y * side + x + 1),
                    mark => format!(" {:>width$} ", mark.symbol()),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let separator = vec!["-".repeat(width + 2); side].join("+");
    let mut output = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            output.push_str(&separator);
            output.push('\n');
        }
        output.push_str(row);
        output.push('\n');
    }
    output
}

fn render_status(snapshot: &SessionSnapshot) -> String {
    match snapshot.phase {
        SessionPhase::AwaitingSideChoice => "Choose your side: x or o".to_string(),
        SessionPhase::InProgress => match snapshot.human_mark {
            Some(mark) if snapshot.human_turn => format!("Your move ({})", mark.symbol()),
            _ => "Computer is thinking".to_string(),
        },
        SessionPhase::Finished => {
            let verdict = match (snapshot.result, snapshot.result.winner()) {
                (GameResult::Draw, _) => "Draw.".to_string(),
                (_, Some(winner)) if Some(winner) == snapshot.human_mark => "You win!".to_string(),
                (_, Some(winner)) => format!("Computer wins as {}.", winner.symbol()),
                (_, None) => "Game over.".to_string(),
            };
            match snapshot.winning_line {
                Some(line) => format!(
                    "{} Winning line: {}. Type 'reset' to play again",
                    verdict,
                    describe_line(line.kind)
                ),
                None => format!("{} Type 'reset' to play again", verdict),
            }
        }
    }
}

fn describe_line(kind: LineKind) -> String {
    match kind {
        LineKind::Row(y) => format!("row {}", y + 1),
        LineKind::Column(x) => format!("column {}", x + 1),
        LineKind::MainDiagonal => "diagonal".to_string(),
        LineKind::AntiDiagonal => "anti-diagonal".to_string(),
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SessionObserver for TerminalRenderer<W> {
    fn on_state_changed(&mut self, snapshot: &SessionSnapshot) {
        let rendered = render_snapshot(snapshot);
        if let Err(e) = self.out.write_all(rendered.as_bytes()).and_then(|_| self.out.flush()) {
            log!("Failed to render board: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Board, LineKind, Position, WinningLine};

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn snapshot(phase: SessionPhase, cells: Vec<Mark>, result: GameResult) -> SessionSnapshot {
        SessionSnapshot {
            phase,
            board: Board::from_cells(cells).unwrap(),
            result,
            human_turn: true,
            human_mark: Some(X),
            computer_mark: Some(O),
            last_move: None,
            winning_line: None,
        }
    }

    #[test]
    fn test_render_board_numbers_empty_cells() {
        let snapshot = snapshot(
            SessionPhase::InProgress,
            vec![X, E, E, E, O, E, E, E, E],
            GameResult::Undecided,
        );
        let rendered = render_snapshot(&snapshot);
        let expected = " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \n\nYour move (X)\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_large_board_pads_numbers() {
        let snapshot = snapshot(
            SessionPhase::InProgress,
            vec![E; 16],
            GameResult::Undecided,
        );
        let rendered = render_snapshot(&snapshot);
        assert!(rendered.starts_with("  1 |  2 |  3 |  4 \n----+----+----+----\n"));
        assert!(rendered.contains(" 16 \n"));
    }

    #[test]
    fn test_render_awaiting_side_choice() {
        let mut snapshot = snapshot(
            SessionPhase::AwaitingSideChoice,
            vec![E; 9],
            GameResult::Undecided,
        );
        snapshot.human_mark = None;
        assert!(render_snapshot(&snapshot).ends_with("Choose your side: x or o\n"));
    }

    #[test]
    fn test_render_computer_win_with_line() {
        let mut snapshot = snapshot(
            SessionPhase::Finished,
            vec![O, O, O, X, X, E, X, E, E],
            GameResult::OWon,
        );
        snapshot.winning_line = Some(WinningLine::new(
            O,
            LineKind::Row(0),
            Position::new(0, 0),
            Position::new(2, 0),
        ));
        let rendered = render_snapshot(&snapshot);
        assert!(rendered.contains("Computer wins as O. Winning line: row 1."));
    }

    #[test]
    fn test_render_draw() {
        let snapshot = snapshot(
            SessionPhase::Finished,
            vec![X, O, X, X, O, O, O, X, X],
            GameResult::Draw,
        );
        assert!(render_snapshot(&snapshot).contains("Draw. Type 'reset' to play again"));
    }

    #[test]
    fn test_terminal_renderer_writes_snapshot() {
        let snapshot = snapshot(SessionPhase::InProgress, vec![E; 9], GameResult::Undecided);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.on_state_changed(&snapshot);
        let written = String::from_utf8(renderer.out).unwrap();
        assert_eq!(written, render_snapshot(&snapshot));
    }
}
