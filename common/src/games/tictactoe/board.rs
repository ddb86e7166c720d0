use derive_more::{Display, Error};

use super::types::{Mark, Position};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[display("a board needs at least one cell")]
    Empty,
    #[display("{cells} cells do not form a square board")]
    NotSquare { cells: usize },
}

/// Square grid of marks stored row-major. The side length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    side: usize,
}

impl Board {
    /// Panics when `side` is zero.
    pub fn new(side: usize) -> Self {
        assert!(side > 0, "board side must be positive");
        Self {
            cells: vec![Mark::Empty; side * side],
            side,
        }
    }

    pub fn from_cells(cells: Vec<Mark>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::Empty);
        }
        let side = cells.len().isqrt();
        if side * side != cells.len() {
            return Err(BoardError::NotSquare { cells: cells.len() });
        }
        Ok(Self { cells, side })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Writes `mark` at `position`; returns `false` when the position is off the board.
    pub fn set(&mut self, position: Position, mark: Mark) -> bool {
        match self.index_of(position) {
            Some(index) => {
                self.cells[index] = mark;
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, position: Position) -> Option<usize> {
        if position.x >= self.side || position.y >= self.side {
            return None;
        }
        Some(position.y * self.side + position.x)
    }

    pub fn position_of(&self, index: usize) -> Option<Position> {
        if index >= self.cells.len() {
            return None;
        }
        Some(Position::new(index % self.side, index / self.side))
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| Position::new(index % self.side, index / self.side))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}
