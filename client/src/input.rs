#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    Empty,
    Help,
    Reset,
    Quit,
    /// Anything else: a side while choosing sides, a cell number during a game.
    Value(String),
}

pub fn parse_command(line: &str) -> PlayerCommand {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => PlayerCommand::Empty,
        "help" | "h" | "?" => PlayerCommand::Help,
        "reset" | "r" | "new" => PlayerCommand::Reset,
        "quit" | "q" | "exit" => PlayerCommand::Quit,
        _ => PlayerCommand::Value(trimmed.to_string()),
    }
}

/// Converts a 1-based cell number as shown on the board into a 0-based cell index.
pub fn parse_cell(value: &str, cell_count: usize) -> Result<usize, String> {
    let number: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", value.trim()))?;
    if number == 0 || number > cell_count {
        return Err(format!("Cell number must be between 1 and {}", cell_count));
    }
    Ok(number - 1)
}
