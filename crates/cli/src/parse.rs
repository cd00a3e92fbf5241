//! Command parsing for the line mode.

use chess_core::square::Square;

/// A line-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move directly, e.g. `e2e4` or `e2 e4`
    Move(Square, Square),
    /// Feed one click into the selection, e.g. `select e2`
    Click(Square),
    Undo,
    Restart,
    Board,
    Help,
    Quit,
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_command(input: &str) -> Result<Option<Command>, String> {
    let input = input.trim().to_ascii_lowercase();
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let command = match tokens.as_slice() {
        [] => return Ok(None),
        ["undo" | "u"] => Command::Undo,
        ["restart" | "new" | "n"] => Command::Restart,
        ["board" | "b"] => Command::Board,
        ["help" | "h" | "?"] => Command::Help,
        ["quit" | "q" | "exit"] => Command::Quit,
        ["select" | "click" | "s", sq] => Command::Click(parse_square(sq)?),
        ["select" | "click" | "s"] => {
            return Err("Missing square: try `select e2`".to_string());
        }
        [from, to] => Command::Move(parse_square(from)?, parse_square(to)?),
        [mv] if mv.len() == 4 && mv.is_ascii() => {
            Command::Move(parse_square(&mv[..2])?, parse_square(&mv[2..])?)
        }
        _ => return Err(format!("Unknown command: {input}")),
    };
    Ok(Some(command))
}

fn parse_square(s: &str) -> Result<Square, String> {
    s.parse::<Square>()
        .map_err(|e| format!("Invalid square '{s}': {e}"))
}
