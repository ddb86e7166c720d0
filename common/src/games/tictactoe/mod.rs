mod board;
mod bot_controller;
mod bot_type;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BoardError};
pub use bot_controller::{
    BotError, BotInput, BotMove, DRAW_SCORE, LOSS_SCORE, MinimaxOutcome, WIN_SCORE,
    calculate_minimax_move, calculate_move, calculate_random_move, minimax,
};
pub use bot_type::BotType;
pub use game_state::{MoveError, TicTacToeGameState};
pub use session::{
    ObserverId, SessionObserver, SessionPhase, SessionSnapshot, TicTacToeSession,
};
pub use settings::{
    MAX_BOARD_SIDE, MAX_MINIMAX_BOARD_SIDE, MIN_BOARD_SIDE, TicTacToeSessionSettings,
};
pub use types::{GameResult, LineKind, Mark, Position, SideChoiceError, WinningLine};
pub use win_detector::{check_win, evaluate, find_winning_line};
