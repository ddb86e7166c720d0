use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    /// Exhaustive minimax search; never loses.
    Minimax,
    /// Uniform choice among the empty cells.
    Random,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Minimax => write!(f, "minimax"),
            BotType::Random => write!(f, "random"),
        }
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(BotType::Minimax),
            "random" => Ok(BotType::Random),
            other => Err(format!(
                "Unknown bot type '{}', expected 'minimax' or 'random'",
                other
            )),
        }
    }
}
