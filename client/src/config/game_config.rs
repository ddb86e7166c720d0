use common::config::Validate;
use common::games::tictactoe::{BotType, Mark, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_side: u32,
    pub bot: BotType,
    /// Side picked automatically at start and after every reset.
    #[serde(default)]
    pub default_side: Option<Mark>,
}

impl GameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            board_side: self.board_side as usize,
            bot_type: self.bot,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.session_settings().validate()?;
        if self.default_side == Some(Mark::Empty) {
            return Err("default_side must be x or o".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_side: 3,
            bot: BotType::Minimax,
            default_side: None,
        }
    }
}
