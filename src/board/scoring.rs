//! Line tallies and the rules that turn them into a game result.
//!
//! A full board is scored line by line: every row and every column is
//! reduced to a `LineTally` holding how many X and O marks it contains.
//! The configured `Scoring` rule then folds the tallies, in order, into a
//! winner (`Piece::X` / `Piece::O`) or a tie (`Piece::Blank`).

use std::cmp::Ordering;

use log::trace;
use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// X and O counts for a single row or column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub x: usize,
    pub o: usize,
}

impl LineTally {
    /// Counts the marks in one line of cells.
    pub fn of<I: IntoIterator<Item = Piece>>(cells: I) -> Self {
        cells
            .into_iter()
            .fold(LineTally::default(), |mut tally, piece| {
                match piece {
                    Piece::X => tally.x += 1,
                    Piece::O => tally.o += 1,
                    Piece::Blank | Piece::Invalid => {}
                }
                tally
            })
    }
}

/// How the line tallies of a full board decide the winner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scoring {
    /// The player whose best line holds strictly more of their marks than
    /// the opponent's best line wins. Equal bests are a tie.
    #[default]
    LongestLine,
    /// Leader tracking: a line takes the lead only by strictly beating the
    /// best count so far, and any line that does not resets the leader to
    /// a tie. The result is whoever leads after the last line.
    LeaderReset,
}

impl Scoring {
    /// Returns the option-value name of this rule.
    pub const fn name(self) -> &'static str {
        match self {
            Scoring::LongestLine => "longestline",
            Scoring::LeaderReset => "leaderreset",
        }
    }

    /// Parses a rule from its option-value name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Scoring> {
        match name.to_ascii_lowercase().as_str() {
            "longestline" => Some(Scoring::LongestLine),
            "leaderreset" => Some(Scoring::LeaderReset),
            _ => None,
        }
    }

    /// Folds the tallies, in order, into `X`, `O` or `Blank`.
    pub fn decide<I: IntoIterator<Item = LineTally>>(self, lines: I) -> Piece {
        match self {
            Scoring::LongestLine => longest_line(lines),
            Scoring::LeaderReset => leader_reset(lines),
        }
    }
}

fn longest_line<I: IntoIterator<Item = LineTally>>(lines: I) -> Piece {
    let (mut best_x, mut best_o) = (0, 0);
    for (i, tally) in lines.into_iter().enumerate() {
        trace!("line {}: X={} O={}", i, tally.x, tally.o);
        best_x = best_x.max(tally.x);
        best_o = best_o.max(tally.o);
    }

    match best_x.cmp(&best_o) {
        Ordering::Greater => Piece::X,
        Ordering::Less => Piece::O,
        Ordering::Equal => Piece::Blank,
    }
}

fn leader_reset<I: IntoIterator<Item = LineTally>>(lines: I) -> Piece {
    let mut leader = Piece::Blank;
    let mut best = 0;

    for (i, tally) in lines.into_iter().enumerate() {
        trace!("line {}: X={} O={}", i, tally.x, tally.o);
        if tally.x > tally.o && tally.x > best {
            leader = Piece::X;
            best = tally.x;
        } else if tally.o > tally.x && tally.o > best {
            leader = Piece::O;
            best = tally.o;
        } else {
            leader = Piece::Blank;
        }
    }

    leader
}
