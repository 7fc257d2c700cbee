//! Text protocol handling.
//!
//! This module implements the line protocol a frontend uses to drive the
//! engine: the command parser, the compact position notation, and JSON
//! snapshots.

pub mod notation;
pub mod parser;
pub mod snapshot;

pub use notation::{encode_position, parse_position, NotationError, Position};
pub use parser::{parse_command, Command, ParseError};
pub use snapshot::Snapshot;
