use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// Parses a side picked in the UI: `x`/`0` or `o`/`1`, case-insensitive.
    pub fn from_side_value(raw: &str) -> Option<Mark> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x" | "0" => Some(Mark::X),
            "o" | "1" => Some(Mark::O),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Undecided,
    XWon,
    OWon,
    Draw,
}

impl GameResult {
    pub fn won_by(mark: Mark) -> GameResult {
        match mark {
            Mark::X => GameResult::XWon,
            Mark::O => GameResult::OWon,
            Mark::Empty => GameResult::Undecided,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::XWon => Some(Mark::X),
            GameResult::OWon => Some(Mark::O),
            GameResult::Undecided | GameResult::Draw => None,
        }
    }

    pub fn is_decided(&self) -> bool {
        *self != GameResult::Undecided
    }
}

/// `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub kind: LineKind,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, kind: LineKind, start: Position, end: Position) -> Self {
        Self {
            mark,
            kind,
            start,
            end,
        }
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SideChoiceError {
    #[display("a side must be X or O")]
    InvalidMark,
    #[display("cannot parse side choice {input:?}")]
    Unparseable { input: String },
    #[display("sides can only be chosen before the game starts")]
    NotAwaitingSideChoice,
}
