//! Engine state management.
//!
//! Holds the game board and the engine options between commands, and writes
//! the protocol response for each command.

use std::collections::HashMap;
use std::io::{self, Write};

use log::debug;

use crate::board::{GameBoard, Piece, Scoring, COLS, ROWS};
use crate::protocol::notation::encode_position;
use crate::protocol::snapshot::Snapshot;

/// Selects the rule used to score a full board.
pub const SCORING_OPTION: &str = "Scoring";
/// When on, every `drop` response is followed by the grid.
pub const SHOW_BOARD_OPTION: &str = "ShowBoard";

/// Errors from `setoption`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option: '{0}'")]
    Unknown(String),

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for option {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub board: GameBoard,
    pub options: HashMap<String, String>,
    show_board: bool,
}

impl Engine {
    /// Creates an engine with an empty board and default options.
    pub fn new() -> Self {
        Engine {
            board: GameBoard::new(),
            options: HashMap::new(),
            show_board: false,
        }
    }

    /// Clears the board for a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.board.reset();
    }

    /// Sets an engine option. Option names match case-insensitively.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        if name.eq_ignore_ascii_case(SCORING_OPTION) {
            let value = value.ok_or(OptionError::MissingValue(SCORING_OPTION))?;
            let scoring = Scoring::from_name(value).ok_or_else(|| OptionError::InvalidValue {
                name: SCORING_OPTION,
                value: value.to_string(),
            })?;
            self.board.set_scoring(scoring);
            self.options.insert(SCORING_OPTION.to_string(), scoring.name().to_string());
        } else if name.eq_ignore_ascii_case(SHOW_BOARD_OPTION) {
            // A bare `setoption name ShowBoard` switches it on.
            let on = match value.map(str::to_ascii_lowercase).as_deref() {
                None | Some("true") | Some("on") => true,
                Some("false") | Some("off") => false,
                Some(_) => {
                    return Err(OptionError::InvalidValue {
                        name: SHOW_BOARD_OPTION,
                        value: value.unwrap_or_default().to_string(),
                    })
                }
            };
            self.show_board = on;
            self.options.insert(SHOW_BOARD_OPTION.to_string(), on.to_string());
        } else {
            return Err(OptionError::Unknown(name.to_string()));
        }
        debug!("option {} set to {:?}", name, value);
        Ok(())
    }

    /// Handles the handshake: writes id, options, board size, and `piezasok`.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name piezas")?;
        writeln!(out, "id author piezas developers")?;
        writeln!(
            out,
            "option name {} type combo default {} var {} var {}",
            SCORING_OPTION,
            Scoring::default().name(),
            Scoring::LongestLine.name(),
            Scoring::LeaderReset.name()
        )?;
        writeln!(out, "option name {} type check default false", SHOW_BOARD_OPTION)?;
        writeln!(out, "rows {}", ROWS)?;
        writeln!(out, "cols {}", COLS)?;
        writeln!(out, "piezasok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `drop <column>`: drops for the side to move and reports the
    /// result.
    pub fn handle_drop<W: Write>(&mut self, column: i32, out: &mut W) -> io::Result<()> {
        let placed = self.board.drop_piece(column);
        writeln!(out, "dropped {}", placed.name())?;
        if self.show_board {
            self.write_board(out)?;
        }
        out.flush()
    }

    /// Handles `piece <row> <column>`.
    pub fn handle_piece<W: Write>(&self, row: i32, column: i32, out: &mut W) -> io::Result<()> {
        writeln!(out, "piece {}", self.board.piece_at(row, column).name())?;
        out.flush()
    }

    /// Handles `state`.
    pub fn handle_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.board.game_state() {
            Piece::Invalid => writeln!(out, "state ongoing")?,
            Piece::Blank => writeln!(out, "state tie")?,
            winner => writeln!(out, "state winner {}", winner.name())?,
        }
        out.flush()
    }

    /// Handles `turn`.
    pub fn handle_turn<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "turn {}", self.board.turn().name())?;
        out.flush()
    }

    /// Handles `board`.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_board(out)?;
        out.flush()
    }

    /// Handles `position`.
    pub fn handle_position<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "position {}", encode_position(&self.board))?;
        out.flush()
    }

    /// Handles `snapshot`.
    pub fn handle_snapshot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = Snapshot::of(&self.board).to_json()?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    fn write_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.board)?;
        writeln!(out, "turn {}", self.board.turn().name())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
