use crate::config::Validate;
use super::bot_type::BotType;

pub const MIN_BOARD_SIDE: usize = 3;
pub const MAX_BOARD_SIDE: usize = 5;
/// Largest board the exhaustive search finishes on in reasonable time.
pub const MAX_MINIMAX_BOARD_SIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub board_side: usize,
    pub bot_type: BotType,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            board_side: 3,
            bot_type: BotType::Minimax,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.board_side < MIN_BOARD_SIDE || self.board_side > MAX_BOARD_SIDE {
            return Err(format!(
                "Board side must be between {} and {}, got {}",
                MIN_BOARD_SIDE, MAX_BOARD_SIDE, self.board_side
            ));
        }
        if self.bot_type == BotType::Minimax && self.board_side > MAX_MINIMAX_BOARD_SIDE {
            return Err(format!(
                "Minimax bot supports boards up to {}x{}, got {}x{}",
                MAX_MINIMAX_BOARD_SIDE, MAX_MINIMAX_BOARD_SIDE, self.board_side, self.board_side
            ));
        }
        Ok(())
    }
}
