//! Command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop can dispatch on.

use std::num::ParseIntError;

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("malformed {command}: expected '{usage}'")]
    Malformed {
        command: &'static str,
        usage: &'static str,
    },

    #[error("invalid {what} '{value}': {source}")]
    InvalidNumber {
        what: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// A parsed frontend-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake; engine replies with its identity and options.
    Hello,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Clear the board for a new game. Also accepted as `reset`.
    NewGame,

    /// Drop the side-to-move's piece into a column.
    Drop { column: i32 },

    /// Query the piece at a bottom-up row and a column.
    PieceAt { row: i32, column: i32 },

    /// Report the game result so far.
    State,

    /// Report the side to move.
    Turn,

    /// Print the grid.
    Board,

    /// Print the position notation.
    Position,

    /// Print a JSON snapshot.
    Snapshot,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input.
///
/// Returns `Ok(None)` for blank lines. Column and row arguments are taken
/// as signed integers so off-board values reach the board, which answers
/// them with `invalid`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Ok(None);
    };

    let cmd = match head {
        "piezas" => Command::Hello,
        "isready" => Command::IsReady,
        "newgame" | "reset" => Command::NewGame,
        "state" => Command::State,
        "turn" => Command::Turn,
        "board" => Command::Board,
        "position" => Command::Position,
        "snapshot" => Command::Snapshot,
        "quit" => Command::Quit,

        "setoption" => parse_setoption(&tokens)?,
        "drop" => parse_drop(&tokens)?,
        "piece" => parse_piece(&tokens)?,

        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(cmd))
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ParseError> {
    const MALFORMED: ParseError = ParseError::Malformed {
        command: "setoption",
        usage: "setoption name <id> [value <x>]",
    };

    if tokens.len() < 3 || tokens[1] != "name" {
        return Err(MALFORMED);
    }

    let (name_parts, value_parts) = match tokens.iter().position(|&t| t == "value") {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        return Err(MALFORMED);
    }

    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Ok(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `drop <column>`.
fn parse_drop(tokens: &[&str]) -> Result<Command, ParseError> {
    match tokens {
        [_, column] => Ok(Command::Drop {
            column: parse_int("column", column)?,
        }),
        _ => Err(ParseError::Malformed {
            command: "drop",
            usage: "drop <column>",
        }),
    }
}

/// Parses `piece <row> <column>`.
fn parse_piece(tokens: &[&str]) -> Result<Command, ParseError> {
    match tokens {
        [_, row, column] => Ok(Command::PieceAt {
            row: parse_int("row", row)?,
            column: parse_int("column", column)?,
        }),
        _ => Err(ParseError::Malformed {
            command: "piece",
            usage: "piece <row> <column>",
        }),
    }
}

fn parse_int(what: &'static str, value: &str) -> Result<i32, ParseError> {
    value.parse::<i32>().map_err(|source| ParseError::InvalidNumber {
        what,
        value: value.to_string(),
        source,
    })
}
